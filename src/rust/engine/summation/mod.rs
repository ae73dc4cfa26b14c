//! Compensated floating-point summation.
//!
//! These accumulators are independent of the practice domain. The exact
//! practice engine sums its per-step durations with [`KahanSum`]; the other
//! algorithms are kept for diagnostics and comparison.

use serde::{Deserialize, Serialize};

/// Kahan compensated accumulator.
///
/// Tracks the low-order bits lost by each addition and feeds them back into
/// the next one, so the error bound does not grow with the number of terms.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KahanSum {
    sum: f64,
    compensation: f64,
}

impl KahanSum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64) {
        let y = value - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    pub fn total(&self) -> f64 {
        self.sum
    }

    /// Rounding residual still pending at this point of the sum.
    pub fn compensation(&self) -> f64 {
        self.compensation
    }
}

impl Extend<f64> for KahanSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for KahanSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = KahanSum::new();
        acc.extend(iter);
        acc
    }
}

/// Kahan-Babuska (Neumaier) accumulator.
///
/// Same idea as [`KahanSum`], but also correct when an incoming term is larger
/// in magnitude than the running sum.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NeumaierSum {
    sum: f64,
    compensation: f64,
}

impl NeumaierSum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    pub fn total(&self) -> f64 {
        self.sum + self.compensation
    }
}

impl Extend<f64> for NeumaierSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for NeumaierSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = NeumaierSum::new();
        acc.extend(iter);
        acc
    }
}

/// Sum a sequence with Kahan compensation.
pub fn compensated_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().collect::<KahanSum>().total()
}

/// Plain left-to-right accumulation.
pub fn naive_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(0.0, |acc, v| acc + v)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SummationAlgorithm {
    Naive,
    #[default]
    Kahan,
    Neumaier,
}

impl SummationAlgorithm {
    pub fn sum<I>(self, values: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        match self {
            SummationAlgorithm::Naive => naive_sum(values),
            SummationAlgorithm::Kahan => compensated_sum(values),
            SummationAlgorithm::Neumaier => values.into_iter().collect::<NeumaierSum>().total(),
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "naive" => Some(SummationAlgorithm::Naive),
            "kahan" => Some(SummationAlgorithm::Kahan),
            "neumaier" | "kahan-babuska" => Some(SummationAlgorithm::Neumaier),
            _ => None,
        }
    }
}

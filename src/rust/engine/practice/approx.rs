use serde::Serialize;

use super::params::PracticeParameters;

/// Intermediate values of the S-P formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproxTerms {
    /// S = a + b'
    pub sum: f64,
    /// P = a * b'
    pub product: f64,
    /// 4nS / (S^2 + 4P), the stand-in for the integral of 1/tempo.
    pub main_term: f64,
    /// S / 2P, the end-point correction.
    pub correction_term: f64,
}

pub fn approx_terms(params: &PracticeParameters) -> ApproxTerms {
    let n = params.step_count() as f64;
    let a = params.start_tempo();
    let b = params.actual_end_tempo();

    let sum = a + b;
    let product = a * b;

    ApproxTerms {
        sum,
        product,
        main_term: (4.0 * n * sum) / (sum * sum + 4.0 * product),
        correction_term: sum / (2.0 * product),
    }
}

/// Closed-form estimate of the total practice time. Constant work regardless
/// of the step count.
pub fn approx_seconds(params: &PracticeParameters) -> f64 {
    let terms = approx_terms(params);
    params.time_constant() * (terms.main_term + terms.correction_term) * params.sets() as f64
}

/// Signed relative error in percent; positive when the estimate overshoots.
pub fn error_rate_percent(approx: f64, exact: f64) -> f64 {
    (approx - exact) / exact * 100.0
}

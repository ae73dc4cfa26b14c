use rayon::prelude::*;
use serde::Serialize;

use super::params::{RawPracticeInput, ValidationError};
use super::result::{PracticeResult, calculate};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPoint {
    pub step_size: f64,
    #[serde(flatten)]
    pub outcome: SweepOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SweepOutcome {
    Result(PracticeResult),
    Error { kind: String, message: String },
}

impl SweepPoint {
    pub fn result(&self) -> Option<&PracticeResult> {
        match &self.outcome {
            SweepOutcome::Result(result) => Some(result),
            SweepOutcome::Error { .. } => None,
        }
    }
}

impl From<Result<PracticeResult, ValidationError>> for SweepOutcome {
    fn from(value: Result<PracticeResult, ValidationError>) -> Self {
        match value {
            Ok(result) => SweepOutcome::Result(result),
            Err(e) => SweepOutcome::Error {
                kind: e.kind().to_string(),
                message: e.to_string(),
            },
        }
    }
}

/// Run the engine once per step size, in parallel. Output order follows
/// `step_sizes`; each point is validated on its own, so one bad step size
/// does not affect the others.
pub fn sweep_step_sizes(base: &RawPracticeInput, step_sizes: &[f64]) -> Vec<SweepPoint> {
    step_sizes
        .par_iter()
        .map(|&step_size| {
            let input = RawPracticeInput {
                step_size,
                ..*base
            };
            SweepPoint {
                step_size,
                outcome: calculate(&input).into(),
            }
        })
        .collect()
}

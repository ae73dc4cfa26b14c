use serde::Serialize;

use super::approx::{approx_seconds, error_rate_percent};
use super::exact::exact_seconds;
use super::params::{PracticeParameters, RawPracticeInput, ValidationError, validate};

/// Everything computed for one practice request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeResult {
    pub exact_seconds: f64,
    pub approx_seconds: f64,
    pub error_rate_percent: f64,
    pub step_count: u64,
    pub actual_end_tempo: f64,
    pub total_beats_per_step: u64,
    pub time_constant: f64,
    pub parameters: PracticeParameters,
}

impl PracticeResult {
    pub fn from_parameters(params: &PracticeParameters) -> Self {
        let exact = exact_seconds(params);
        let approx = approx_seconds(params);

        Self {
            exact_seconds: exact,
            approx_seconds: approx,
            error_rate_percent: error_rate_percent(approx, exact),
            step_count: params.step_count(),
            actual_end_tempo: params.actual_end_tempo(),
            total_beats_per_step: params.total_beats_per_step(),
            time_constant: params.time_constant(),
            parameters: *params,
        }
    }
}

/// Validate a raw request and run both engines on it.
pub fn calculate(raw: &RawPracticeInput) -> Result<PracticeResult, ValidationError> {
    let params = validate(raw)?;
    Ok(PracticeResult::from_parameters(&params))
}

use serde::Serialize;

use super::params::PracticeParameters;
use crate::engine::summation::KahanSum;

/// Time spent at one tempo step, across all sets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepEntry {
    pub index: u64,
    pub tempo: f64,
    pub seconds: f64,
    pub cumulative_seconds: f64,
}

/// Seconds for one set of K beats at `tempo`.
fn step_time(params: &PracticeParameters, tempo: f64) -> f64 {
    params.time_constant() / tempo
}

/// Exact total practice time: every step's duration summed with Kahan
/// compensation, then scaled by the number of sets.
pub fn exact_seconds(params: &PracticeParameters) -> f64 {
    let per_set: KahanSum = params
        .step_tempos()
        .map(|tempo| step_time(params, tempo))
        .collect();
    per_set.total() * params.sets() as f64
}

/// Per-step breakdown of the exact computation.
///
/// `cumulative_seconds` of the last entry equals [`exact_seconds`].
pub fn step_schedule(params: &PracticeParameters) -> Vec<StepEntry> {
    let sets = params.sets() as f64;
    let mut running = KahanSum::new();

    params
        .step_tempos()
        .enumerate()
        .map(|(index, tempo)| {
            let per_set = step_time(params, tempo);
            running.add(per_set);
            StepEntry {
                index: index as u64,
                tempo,
                seconds: per_set * sets,
                cumulative_seconds: running.total() * sets,
            }
        })
        .collect()
}

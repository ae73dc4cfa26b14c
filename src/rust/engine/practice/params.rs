use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on `floor((end - start) / step)`. Keeps the exact engine's loop
/// bounded for any accepted input.
pub const MAX_STEP_COUNT: u64 = 10_000_000;

/// Seconds per minute; converts a BPM figure into seconds per beat.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Unvalidated practice request, as handed over by a UI or config layer.
///
/// Counts are plain numbers here; validation checks that they are whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPracticeInput {
    #[serde(alias = "start_tempo")]
    pub start_tempo: f64,
    #[serde(alias = "end_tempo")]
    pub end_tempo: f64,
    #[serde(alias = "step_size", alias = "step")]
    pub step_size: f64,
    #[serde(alias = "beats_per_phrase", alias = "beats")]
    pub beats_per_phrase: f64,
    #[serde(alias = "reps")]
    pub repetitions: f64,
    pub sets: f64,
}

impl RawPracticeInput {
    pub fn validate(&self) -> Result<PracticeParameters, ValidationError> {
        validate(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    NonPositiveStep,
    NonPositiveTempo,
    InvalidTempoRange,
    NonPositiveCount,
    NonFiniteInput,
    TooManySteps,
}

impl ValidationErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationErrorKind::NonPositiveStep => "NonPositiveStep",
            ValidationErrorKind::NonPositiveTempo => "NonPositiveTempo",
            ValidationErrorKind::InvalidTempoRange => "InvalidTempoRange",
            ValidationErrorKind::NonPositiveCount => "NonPositiveCount",
            ValidationErrorKind::NonFiniteInput => "NonFiniteInput",
            ValidationErrorKind::TooManySteps => "TooManySteps",
        }
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("step size must be greater than 0 (got {step})")]
    NonPositiveStep { step: f64 },

    #[error("start and end tempo must both be greater than 0 (got start {start}, end {end})")]
    NonPositiveTempo { start: f64, end: f64 },

    #[error("start tempo must be lower than end tempo (got start {start}, end {end})")]
    InvalidTempoRange { start: f64, end: f64 },

    #[error("{field} must be a positive whole number (got {value})")]
    NonPositiveCount { field: &'static str, value: f64 },

    #[error("tempo and step values must be finite")]
    NonFiniteInput,

    #[error("{steps} tempo steps exceed the limit of {limit}")]
    TooManySteps { steps: f64, limit: u64 },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::NonPositiveStep { .. } => ValidationErrorKind::NonPositiveStep,
            ValidationError::NonPositiveTempo { .. } => ValidationErrorKind::NonPositiveTempo,
            ValidationError::InvalidTempoRange { .. } => ValidationErrorKind::InvalidTempoRange,
            ValidationError::NonPositiveCount { .. } => ValidationErrorKind::NonPositiveCount,
            ValidationError::NonFiniteInput => ValidationErrorKind::NonFiniteInput,
            ValidationError::TooManySteps { .. } => ValidationErrorKind::TooManySteps,
        }
    }
}

/// Validated practice parameters. Read-only once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeParameters {
    start_tempo: f64,
    end_tempo: f64,
    step_size: f64,
    beats_per_phrase: u32,
    repetitions: u32,
    sets: u32,
}

impl PracticeParameters {
    pub fn new(
        start_tempo: f64,
        end_tempo: f64,
        step_size: f64,
        beats_per_phrase: u32,
        repetitions: u32,
        sets: u32,
    ) -> Result<Self, ValidationError> {
        validate(&RawPracticeInput {
            start_tempo,
            end_tempo,
            step_size,
            beats_per_phrase: beats_per_phrase as f64,
            repetitions: repetitions as f64,
            sets: sets as f64,
        })
    }

    pub fn start_tempo(&self) -> f64 {
        self.start_tempo
    }

    pub fn end_tempo(&self) -> f64 {
        self.end_tempo
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn beats_per_phrase(&self) -> u32 {
        self.beats_per_phrase
    }

    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    pub fn sets(&self) -> u32 {
        self.sets
    }

    /// K: beats played at each tempo step within one set.
    pub fn total_beats_per_step(&self) -> u64 {
        self.beats_per_phrase as u64 * self.repetitions as u64
    }

    /// C: seconds needed for K beats at 1 BPM.
    pub fn time_constant(&self) -> f64 {
        SECONDS_PER_MINUTE * self.total_beats_per_step() as f64
    }

    /// n: increments taken beyond the start tempo without passing the target.
    pub fn step_count(&self) -> u64 {
        raw_step_count(self.start_tempo, self.end_tempo, self.step_size) as u64
    }

    /// b': the last tempo actually practiced.
    pub fn actual_end_tempo(&self) -> f64 {
        self.start_tempo + self.step_count() as f64 * self.step_size
    }

    /// Tempo of every step, `start + step * k` for k in `0..=n`.
    pub fn step_tempos(&self) -> impl Iterator<Item = f64> + Clone {
        let (start, step) = (self.start_tempo, self.step_size);
        (0..=self.step_count()).map(move |k| start + step * k as f64)
    }

    pub fn to_raw(&self) -> RawPracticeInput {
        RawPracticeInput {
            start_tempo: self.start_tempo,
            end_tempo: self.end_tempo,
            step_size: self.step_size,
            beats_per_phrase: self.beats_per_phrase as f64,
            repetitions: self.repetitions as f64,
            sets: self.sets as f64,
        }
    }
}

fn raw_step_count(start: f64, end: f64, step: f64) -> f64 {
    ((end - start) / step).floor()
}

/// Check a raw request and turn it into [`PracticeParameters`].
///
/// Checks run in a fixed order and the first failure is reported:
/// step, tempo sign, tempo range, counts, then finiteness and step limit.
pub fn validate(raw: &RawPracticeInput) -> Result<PracticeParameters, ValidationError> {
    let RawPracticeInput {
        start_tempo,
        end_tempo,
        step_size,
        beats_per_phrase,
        repetitions,
        sets,
    } = *raw;

    // negated comparisons so NaN fails too
    if !(step_size > 0.0) {
        return Err(ValidationError::NonPositiveStep { step: step_size });
    }

    if !(start_tempo > 0.0) || !(end_tempo > 0.0) {
        return Err(ValidationError::NonPositiveTempo {
            start: start_tempo,
            end: end_tempo,
        });
    }

    if !(start_tempo < end_tempo) {
        return Err(ValidationError::InvalidTempoRange {
            start: start_tempo,
            end: end_tempo,
        });
    }

    let beats_per_phrase = positive_count("beatsPerPhrase", beats_per_phrase)?;
    let repetitions = positive_count("repetitions", repetitions)?;
    let sets = positive_count("sets", sets)?;

    if !end_tempo.is_finite() || !step_size.is_finite() {
        return Err(ValidationError::NonFiniteInput);
    }

    let steps = raw_step_count(start_tempo, end_tempo, step_size);
    if steps > MAX_STEP_COUNT as f64 {
        return Err(ValidationError::TooManySteps {
            steps,
            limit: MAX_STEP_COUNT,
        });
    }

    Ok(PracticeParameters {
        start_tempo,
        end_tempo,
        step_size,
        beats_per_phrase,
        repetitions,
        sets,
    })
}

fn positive_count(field: &'static str, value: f64) -> Result<u32, ValidationError> {
    if value.is_finite() && value >= 1.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(ValidationError::NonPositiveCount { field, value })
    }
}

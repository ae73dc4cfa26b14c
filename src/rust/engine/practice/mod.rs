//! Practice-time engine.
//!
//! Given a tempo ladder (start, target, increment) and how much is played at
//! each rung, computes the total time two ways: an exact compensated sum over
//! every step and an O(1) closed-form estimate, plus the error between them.

pub mod approx;
pub mod exact;
pub mod params;
pub mod result;
pub mod sweep;

pub use approx::{ApproxTerms, approx_seconds, approx_terms, error_rate_percent};
pub use exact::{StepEntry, exact_seconds, step_schedule};
pub use params::{
    MAX_STEP_COUNT, PracticeParameters, RawPracticeInput, ValidationError, ValidationErrorKind,
    validate,
};
pub use result::{PracticeResult, calculate};
pub use sweep::{SweepOutcome, SweepPoint, sweep_step_sizes};

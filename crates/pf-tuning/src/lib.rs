//! Classical PID tuning rules over FOPDT models.
//!
//! Implements the two reaction-curve rule families:
//! - **Ziegler-Nichols**: fast response, 20-25% overshoot expected
//! - **Cohen-Coon**: refined coefficient sets per integral-error criterion
//!   (IAE/ISE/ITAE), lower overshoot
//!
//! Both are state-free pure functions of a validated `FopdtModel`. Degraded
//! accuracy regimes (high L/T) surface as `TuningWarning` values in the
//! returned `TuningOutcome`, never as errors.

pub mod cohen_coon;
pub mod compare;
pub mod error;
pub mod outcome;
pub mod ziegler_nichols;

mod validate;

pub use cohen_coon::cohen_coon;
pub use compare::{TuningComparison, compare};
pub use error::{TuningError, TuningResult};
pub use outcome::{TuningCriterion, TuningOutcome, TuningWarning};
pub use ziegler_nichols::ziegler_nichols;

//! Error types for tuning operations.

use pf_control::ControlError;
use thiserror::Error;

/// Result type for tuning operations.
pub type TuningResult<T> = Result<T, TuningError>;

/// Errors that can occur when computing controller gains.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TuningError {
    /// FOPDT parameters outside the region the rule is defined on.
    #[error("Invalid model: {what}")]
    InvalidModel { what: &'static str },

    /// Controller structure not supported by the selected rule.
    #[error("Invalid control type: {what}")]
    InvalidControlType { what: &'static str },

    /// Criterion selector not applicable to the selected rule.
    #[error("Invalid criterion: {what}")]
    InvalidCriterion { what: &'static str },

    /// Computed gains failed controller-side validation.
    #[error(transparent)]
    Control(#[from] ControlError),
}

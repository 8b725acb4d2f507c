//! Error types for model construction and queries.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur when building or querying process models.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// Malformed transfer function or FOPDT parameters.
    #[error("Invalid model: {what}")]
    InvalidModel { what: &'static str },

    /// DC gain undefined because the denominator vanishes at s = 0.
    #[error("DC gain undefined: denominator vanishes at s = 0")]
    UndefinedGain,
}

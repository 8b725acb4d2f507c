//! Error types for metric extraction.

use thiserror::Error;

/// Result type for metric extraction.
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Errors that can occur while extracting performance metrics.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MetricsError {
    /// Time/output arrays malformed or the reference/tolerance unusable.
    #[error("Invalid trace: {what}")]
    InvalidTrace { what: &'static str },
}

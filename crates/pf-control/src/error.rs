//! Error types for controller operations.

use thiserror::Error;

/// Result type for controller operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur when building controller configurations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided to a controller constructor.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

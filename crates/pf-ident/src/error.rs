//! Error types for identification operations.

use pf_model::ModelError;
use pf_sim::SimError;
use thiserror::Error;

/// Result type for identification operations.
pub type IdentResult<T> = Result<T, IdentError>;

/// Errors that can occur while identifying an FOPDT model.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IdentError {
    /// Time/response arrays malformed.
    #[error("Invalid trace: {what}")]
    InvalidTrace { what: &'static str },

    /// Identification requires a settling response, so the source system
    /// must be BIBO-stable.
    #[error("System is not BIBO-stable; no settling value exists to identify")]
    UnstableSystem,

    /// Identified parameters landed outside the FOPDT region.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The underlying step-response simulation failed.
    #[error(transparent)]
    Sim(#[from] SimError),
}

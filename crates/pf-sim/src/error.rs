//! Error types for simulation operations.

use pf_model::ModelError;
use thiserror::Error;

/// Errors encountered while realizing or integrating a system.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Operation requires BIBO stability but poles violate it.
    #[error("System is not BIBO-stable; its step response does not settle")]
    UnstableSystem,

    /// Integration blew up (dt too large or an unstabilized loop).
    #[error("State diverged at t = {t}; reduce dt or check the loop gains")]
    Diverged { t: f64 },

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type SimResult<T> = Result<T, SimError>;

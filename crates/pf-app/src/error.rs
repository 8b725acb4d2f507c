//! Unified error type for the service layer.

use pf_ident::IdentError;
use pf_metrics::MetricsError;
use pf_model::ModelError;
use pf_sim::SimError;
use pf_tuning::TuningError;
use thiserror::Error;

/// Result type for service-layer operations.
pub type AppResult<T> = Result<T, AppError>;

/// Any failure a frontend can see from the service layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Ident(#[from] IdentError),

    #[error(transparent)]
    Tuning(#[from] TuningError),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

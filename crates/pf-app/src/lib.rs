//! Shared application service layer for pidflow.
//!
//! This crate is the single function-call surface a frontend (CLI, GUI, or
//! web layer) consumes: transfer-function construction, identification,
//! tuning dispatch, simulation, and metrics are re-exported here, plus a
//! one-call design workflow that chains them. All state threading stays on
//! the caller's side; every operation takes its inputs explicitly.

pub mod design;
pub mod error;
pub mod tune;

pub use design::{DesignReport, DesignRequest, design_pid};
pub use error::{AppError, AppResult};
pub use tune::tune;

// Re-export the value types frontends handle
pub use pf_control::{ControlType, PidParameters, TuningMethod};
pub use pf_ident::{identify_step_response, identify_transfer_function};
pub use pf_metrics::{MetricsComparison, PerformanceMetrics, compare_traces, compute_for_trace};
pub use pf_model::{FopdtModel, TransferFunction};
pub use pf_sim::{
    ComparisonTraces, SimOptions, SimulationTrace, simulate_closed_loop, simulate_comparison,
    simulate_open_loop,
};
pub use pf_tuning::{TuningComparison, TuningCriterion, TuningOutcome, TuningWarning, compare};

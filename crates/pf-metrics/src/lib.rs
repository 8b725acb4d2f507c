//! Performance-metric extraction from time/response traces.
//!
//! Computes the standard step-response indicators (settling time,
//! overshoot, steady-state error, 10-90% rise time, peak value/time)
//! from any time/output pair plus a reference value and tolerance band.
//! Purely derived: metrics are recomputed on demand and hold no state.

pub mod error;
pub mod metrics;

pub use error::{MetricsError, MetricsResult};
pub use metrics::{
    MIN_SAMPLES, MetricsComparison, PerformanceMetrics, compare_traces, compute,
    compute_for_trace,
};

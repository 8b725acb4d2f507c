//! Simulation result record.

use pf_core::Real;
use serde::{Deserialize, Serialize};

/// Sampled response of a simulation run.
///
/// `time` is strictly increasing and the same length as `output`;
/// `control_signal` is populated only for closed-loop runs and shares the
/// same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationTrace {
    /// Sample timestamps (seconds).
    pub time: Vec<Real>,
    /// Plant output y(t) at each sample.
    pub output: Vec<Real>,
    /// Controller output u(t), present for closed-loop runs.
    pub control_signal: Option<Vec<Real>>,
    /// Constant setpoint applied during the run.
    pub reference: Real,
}

impl SimulationTrace {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Last sampled output, if any.
    pub fn final_output(&self) -> Option<Real> {
        self.output.last().copied()
    }

    pub fn is_closed_loop(&self) -> bool {
        self.control_signal.is_some()
    }
}

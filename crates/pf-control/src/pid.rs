//! Discrete positional PID law.

use pf_core::Real;
use serde::{Deserialize, Serialize};

use crate::parameters::PidParameters;

/// Discrete PID controller state.
///
/// Owned by the caller and threaded through `DiscretePid::update`, so a
/// configuration can drive many independent loops.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PidState {
    /// Running error sum Σe[0..k] (includes the current sample).
    pub error_sum: Real,
    /// Previous error e[k−1]; zero before the first sample.
    pub prev_error: Real,
}

/// Positional-form discrete PID controller.
///
/// Computes
///
/// ```text
/// u[k] = Kp·( e[k] + (dt/Ti)·Σe[0..k] + (Td/dt)·(e[k]−e[k−1]) )
/// ```
///
/// Infinite `Ti` collapses the integral term (and stops accumulation);
/// `Td = 0` collapses the derivative term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscretePid {
    params: PidParameters,
}

impl DiscretePid {
    pub fn new(params: PidParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PidParameters {
        &self.params
    }

    /// Compute the control output for one sample.
    ///
    /// # Arguments
    ///
    /// * `state` - Controller state from the previous sample
    /// * `error` - e[k] = reference − measurement
    /// * `dt` - Sample interval (seconds); the caller guarantees dt > 0
    ///
    /// # Returns
    ///
    /// Updated state and control output u[k].
    pub fn update(&self, state: &PidState, error: Real, dt: Real) -> (PidState, Real) {
        let p = &self.params;

        let integral_enabled = p.ti.is_finite();
        let error_sum = if integral_enabled {
            state.error_sum + error
        } else {
            state.error_sum
        };

        let i_term = if integral_enabled {
            (dt / p.ti) * error_sum
        } else {
            0.0
        };

        let d_term = if p.td > 0.0 {
            (p.td / dt) * (error - state.prev_error)
        } else {
            0.0
        };

        let output = p.kp * (error + i_term + d_term);

        let new_state = PidState {
            error_sum,
            prev_error: error,
        };
        (new_state, output)
    }
}

//! First-order-plus-dead-time reduced process model.

use pf_core::Real;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::transfer_function::TransferFunction;

/// FOPDT model G(s) = K·e^(−Ls) / (Ts + 1).
///
/// The physically realizable region is enforced at construction:
/// K > 0, T > 0, L ≥ 0, all finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FopdtModel {
    /// Process gain K.
    pub gain: Real,
    /// Dead time L (seconds).
    pub dead_time: Real,
    /// Time constant T (seconds).
    pub time_constant: Real,
}

impl FopdtModel {
    /// Create a validated FOPDT model.
    ///
    /// # Arguments
    ///
    /// * `gain` - Process gain K, must be positive
    /// * `dead_time` - Dead time L in seconds, must be non-negative
    /// * `time_constant` - Time constant T in seconds, must be positive
    pub fn new(gain: Real, dead_time: Real, time_constant: Real) -> ModelResult<Self> {
        if !gain.is_finite() || !dead_time.is_finite() || !time_constant.is_finite() {
            return Err(ModelError::InvalidModel {
                what: "FOPDT parameters must be finite",
            });
        }
        if gain <= 0.0 {
            return Err(ModelError::InvalidModel {
                what: "gain K must be positive",
            });
        }
        if dead_time < 0.0 {
            return Err(ModelError::InvalidModel {
                what: "dead time L must be non-negative",
            });
        }
        if time_constant <= 0.0 {
            return Err(ModelError::InvalidModel {
                what: "time constant T must be positive",
            });
        }
        Ok(Self {
            gain,
            dead_time,
            time_constant,
        })
    }

    /// L/T, the controllability ratio the tuning rules branch on.
    pub fn lag_ratio(&self) -> Real {
        self.dead_time / self.time_constant
    }

    /// Soft validity check: dead time at least as long as the time constant.
    ///
    /// Reaction-curve tuning degrades in this regime; the tuning crate turns
    /// this into a warning, never an error.
    pub fn is_delay_dominant(&self) -> bool {
        self.lag_ratio() >= 1.0
    }

    /// Closed-form unit-step response K·(1 − e^((L−t)/T)) for t ≥ L, else 0.
    pub fn step_response(&self, t: Real) -> Real {
        let shifted = t - self.dead_time;
        if shifted >= 0.0 {
            self.gain * (1.0 - (-shifted / self.time_constant).exp())
        } else {
            0.0
        }
    }

    /// The rational part K/(Ts + 1) as a `TransferFunction` (delay dropped).
    pub fn transfer_function(&self) -> ModelResult<TransferFunction> {
        TransferFunction::new(vec![self.gain], vec![self.time_constant, 1.0])
    }
}

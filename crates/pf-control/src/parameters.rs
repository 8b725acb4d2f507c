//! Tuned controller parameter records.

use core::fmt;

use pf_core::Real;
use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

/// Controller structure selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlType {
    /// Proportional only.
    P,
    /// Proportional + integral.
    Pi,
    /// Proportional + integral + derivative.
    Pid,
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlType::P => write!(f, "P"),
            ControlType::Pi => write!(f, "PI"),
            ControlType::Pid => write!(f, "PID"),
        }
    }
}

/// Tag identifying which tuning rule produced a gain set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TuningMethod {
    ZieglerNichols,
    CohenCoon,
}

impl fmt::Display for TuningMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningMethod::ZieglerNichols => write!(f, "Ziegler-Nichols"),
            TuningMethod::CohenCoon => write!(f, "Cohen-Coon"),
        }
    }
}

/// Tuned PID parameter set.
///
/// `ti` may be `f64::INFINITY` for a pure proportional controller; the
/// integral term then vanishes. Validated at construction, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidParameters {
    /// Proportional gain.
    pub kp: Real,
    /// Integral time constant (seconds); infinite disables integral action.
    pub ti: Real,
    /// Derivative time constant (seconds).
    pub td: Real,
    /// Tuning rule that produced these values.
    pub method: TuningMethod,
}

impl PidParameters {
    /// Create a validated parameter set.
    ///
    /// # Arguments
    ///
    /// * `kp` - Proportional gain, must be positive and finite
    /// * `ti` - Integral time (seconds), must be positive; may be infinite
    /// * `td` - Derivative time (seconds), must be non-negative and finite
    pub fn new(kp: Real, ti: Real, td: Real, method: TuningMethod) -> ControlResult<Self> {
        if !kp.is_finite() || kp <= 0.0 {
            return Err(ControlError::InvalidArg {
                what: "kp must be positive and finite",
            });
        }
        if ti.is_nan() || ti <= 0.0 {
            return Err(ControlError::InvalidArg {
                what: "ti must be positive (or infinite for P-only)",
            });
        }
        if !td.is_finite() || td < 0.0 {
            return Err(ControlError::InvalidArg {
                what: "td must be non-negative and finite",
            });
        }
        Ok(Self { kp, ti, td, method })
    }

    /// True when integral action is disabled (pure P controller).
    pub fn is_p_only(&self) -> bool {
        self.ti.is_infinite()
    }

    /// Ki = Kp/Ti, zero when integral action is disabled.
    pub fn integral_gain(&self) -> Real {
        if self.ti.is_finite() {
            self.kp / self.ti
        } else {
            0.0
        }
    }

    /// Kd = Kp·Td.
    pub fn derivative_gain(&self) -> Real {
        self.kp * self.td
    }
}

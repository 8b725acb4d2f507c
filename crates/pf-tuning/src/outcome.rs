//! Tuning results and non-fatal warnings.

use core::fmt;

use pf_control::PidParameters;
use pf_core::Real;
use serde::{Deserialize, Serialize};

/// Integral-error criterion selecting a Cohen-Coon coefficient set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TuningCriterion {
    /// Integral absolute error (balanced default).
    Iae,
    /// Integral squared error (penalizes large errors).
    Ise,
    /// Integral time-weighted absolute error (penalizes late errors).
    Itae,
}

impl fmt::Display for TuningCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningCriterion::Iae => write!(f, "IAE"),
            TuningCriterion::Ise => write!(f, "ISE"),
            TuningCriterion::Itae => write!(f, "ITAE"),
        }
    }
}

/// Non-fatal advisory attached to a tuning result.
///
/// Warnings flag reduced accuracy; computation always proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TuningWarning {
    /// L/T above 0.5: the reaction-curve fit loses precision.
    LagRatioHigh { ratio: Real },
    /// Dead time at least as long as the time constant.
    DelayDominant { ratio: Real },
}

impl fmt::Display for TuningWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningWarning::LagRatioHigh { ratio } => {
                write!(f, "L/T = {ratio:.2} exceeds 0.5; rule precision degrades")
            }
            TuningWarning::DelayDominant { ratio } => {
                write!(f, "L/T = {ratio:.2}: dead time dominates the time constant")
            }
        }
    }
}

/// A tuned gain set plus any accuracy advisories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningOutcome {
    pub params: PidParameters,
    pub warnings: Vec<TuningWarning>,
}

impl TuningOutcome {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

//! Ziegler-Nichols reaction-curve tuning.

use pf_control::{ControlType, PidParameters, TuningMethod};
use pf_core::Real;
use pf_model::FopdtModel;

use crate::error::TuningResult;
use crate::outcome::TuningOutcome;
use crate::validate::{lag_warnings, validate_model};

/// Compute P/PI/PID gains from an FOPDT model via Ziegler-Nichols.
///
/// Reaction-curve table:
///
/// ```text
/// P:   Kp = T/(L·K)        Ti = ∞       Td = 0
/// PI:  Kp = 0.9·T/(L·K)    Ti = 3.33·L  Td = 0
/// PID: Kp = 1.2·T/(L·K)    Ti = 2·L     Td = 0.5·L
/// ```
///
/// L/T > 0.5 degrades the fit; that condition surfaces as a warning in the
/// outcome and never aborts the computation.
pub fn ziegler_nichols(model: &FopdtModel, control_type: ControlType) -> TuningResult<TuningOutcome> {
    validate_model(model)?;

    let k = model.gain;
    let l = model.dead_time;
    let t = model.time_constant;

    let (kp, ti, td) = match control_type {
        ControlType::P => (t / (l * k), Real::INFINITY, 0.0),
        ControlType::Pi => (0.9 * t / (l * k), 3.33 * l, 0.0),
        ControlType::Pid => (1.2 * t / (l * k), 2.0 * l, 0.5 * l),
    };

    let params = PidParameters::new(kp, ti, td, TuningMethod::ZieglerNichols)?;
    let warnings = lag_warnings(model.lag_ratio(), true);
    Ok(TuningOutcome { params, warnings })
}

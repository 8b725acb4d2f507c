//! Entry-point validation shared by the tuning rules.

use pf_core::Real;
use pf_model::FopdtModel;
use tracing::warn;

use crate::error::{TuningError, TuningResult};
use crate::outcome::TuningWarning;

/// Re-validate the FOPDT region at the rule entry point.
///
/// `FopdtModel::new` already enforces the region, but fields are public;
/// each public tuning operation validates at entry so it either fully
/// succeeds or reports exactly one error kind.
pub(crate) fn validate_model(model: &FopdtModel) -> TuningResult<()> {
    if !model.gain.is_finite() || model.gain <= 0.0 {
        return Err(TuningError::InvalidModel {
            what: "gain K must be positive",
        });
    }
    if !model.dead_time.is_finite() || model.dead_time < 0.0 {
        return Err(TuningError::InvalidModel {
            what: "dead time L must be non-negative",
        });
    }
    if !model.time_constant.is_finite() || model.time_constant <= 0.0 {
        return Err(TuningError::InvalidModel {
            what: "time constant T must be positive",
        });
    }
    // Every reaction-curve gain formula divides by L; without dead time the
    // rules are undefined (rather than returning infinite gains).
    if model.dead_time == 0.0 {
        return Err(TuningError::InvalidModel {
            what: "dead time L must be positive for reaction-curve tuning",
        });
    }
    Ok(())
}

/// Accuracy advisories for the given lag ratio.
///
/// `flag_above_half` enables the ZN-specific L/T > 0.5 warning; the
/// delay-dominant condition subsumes it when L/T ≥ 1.
pub(crate) fn lag_warnings(ratio: Real, flag_above_half: bool) -> Vec<TuningWarning> {
    if ratio >= 1.0 {
        warn!(ratio, "dead time dominates the time constant");
        vec![TuningWarning::DelayDominant { ratio }]
    } else if flag_above_half && ratio > 0.5 {
        warn!(ratio, "L/T exceeds 0.5; reaction-curve precision degrades");
        vec![TuningWarning::LagRatioHigh { ratio }]
    } else {
        Vec::new()
    }
}

//! Tuning-rule dispatch.

use pf_control::{ControlType, TuningMethod};
use pf_model::FopdtModel;
use pf_tuning::{TuningCriterion, TuningError, TuningOutcome, cohen_coon, ziegler_nichols};

use crate::error::AppResult;

/// Tune a controller for `model` with the selected rule.
///
/// `criterion` selects the Cohen-Coon coefficient set and defaults to IAE;
/// passing one to Ziegler-Nichols is rejected (the rule has no criterion
/// axis) rather than silently ignored.
pub fn tune(
    model: &FopdtModel,
    method: TuningMethod,
    control_type: ControlType,
    criterion: Option<TuningCriterion>,
) -> AppResult<TuningOutcome> {
    match method {
        TuningMethod::ZieglerNichols => {
            if criterion.is_some() {
                return Err(TuningError::InvalidCriterion {
                    what: "Ziegler-Nichols takes no integral-error criterion",
                }
                .into());
            }
            Ok(ziegler_nichols(model, control_type)?)
        }
        TuningMethod::CohenCoon => {
            let criterion = criterion.unwrap_or(TuningCriterion::Iae);
            Ok(cohen_coon(model, criterion, control_type)?)
        }
    }
}

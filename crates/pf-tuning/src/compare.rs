//! Side-by-side rule comparison.

use pf_control::ControlType;
use pf_model::FopdtModel;
use serde::{Deserialize, Serialize};

use crate::cohen_coon::cohen_coon;
use crate::error::TuningResult;
use crate::outcome::{TuningCriterion, TuningOutcome};
use crate::ziegler_nichols::ziegler_nichols;

/// Both rule families applied to the same model at PID level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningComparison {
    pub zn: TuningOutcome,
    pub cc: TuningOutcome,
}

/// Run Ziegler-Nichols and Cohen-Coon (IAE) at PID level for side-by-side
/// inspection.
pub fn compare(model: &FopdtModel) -> TuningResult<TuningComparison> {
    Ok(TuningComparison {
        zn: ziegler_nichols(model, ControlType::Pid)?,
        cc: cohen_coon(model, TuningCriterion::Iae, ControlType::Pid)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_both_methods() {
        let model = FopdtModel::new(1.0, 2.0, 10.0).unwrap();
        let cmp = compare(&model).unwrap();
        // ZN PID vs CC IAE/PID on the literal model
        assert!((cmp.zn.params.kp - 6.0).abs() < 1e-12);
        assert!((cmp.cc.params.kp - 6.75).abs() < 1e-12);
        assert!(cmp.cc.params.ti > cmp.zn.params.ti);
    }

    #[test]
    fn serde_round_trip() {
        let model = FopdtModel::new(2.0, 1.0, 8.0).unwrap();
        let cmp = compare(&model).unwrap();
        let json = serde_json::to_string(&cmp).unwrap();
        let back: TuningComparison = serde_json::from_str(&json).unwrap();
        assert_eq!(cmp, back);
    }
}

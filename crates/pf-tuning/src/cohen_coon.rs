//! Cohen-Coon tuning with IAE/ISE/ITAE coefficient sets.

use pf_control::{ControlType, PidParameters, TuningMethod};
use pf_model::FopdtModel;

use crate::error::{TuningError, TuningResult};
use crate::outcome::{TuningCriterion, TuningOutcome};
use crate::validate::{lag_warnings, validate_model};

/// Compute PI/PID gains from an FOPDT model via Cohen-Coon.
///
/// With r = L/T:
///
/// ```text
/// IAE, r < 0.3:  Kp = 1.35·T/(L·K)             Ti = 2.5·L               Td = 0.37·L
/// IAE, r ≥ 0.3:  Kp = (T/(L·K))·(4/3 + r/4)    Ti = L·(32+6r)/(13+8r)   Td = 4L/(11+2r)
/// ISE:           Kp = 1.495·T/(L·K)            Ti = 1.57·L              Td = 0.735·L
/// ITAE:          Kp = 0.859·T/(L·K)            Ti = 0.674·L             Td = 0.134·L
/// ```
///
/// A PI structure forces Td = 0 regardless of criterion. Cohen-Coon defines
/// no pure-P column, so `ControlType::P` is rejected.
pub fn cohen_coon(
    model: &FopdtModel,
    criterion: TuningCriterion,
    control_type: ControlType,
) -> TuningResult<TuningOutcome> {
    validate_model(model)?;
    if control_type == ControlType::P {
        return Err(TuningError::InvalidControlType {
            what: "Cohen-Coon defines PI and PID only",
        });
    }

    let k = model.gain;
    let l = model.dead_time;
    let t = model.time_constant;
    let r = model.lag_ratio();

    let (kp, ti, td) = match criterion {
        TuningCriterion::Iae if r < 0.3 => (1.35 * t / (l * k), 2.5 * l, 0.37 * l),
        TuningCriterion::Iae => (
            (t / (l * k)) * (4.0 / 3.0 + r / 4.0),
            l * (32.0 + 6.0 * r) / (13.0 + 8.0 * r),
            4.0 * l / (11.0 + 2.0 * r),
        ),
        TuningCriterion::Ise => (1.495 * t / (l * k), 1.57 * l, 0.735 * l),
        TuningCriterion::Itae => (0.859 * t / (l * k), 0.674 * l, 0.134 * l),
    };

    let td = match control_type {
        ControlType::Pi => 0.0,
        _ => td,
    };

    let params = PidParameters::new(kp, ti, td, TuningMethod::CohenCoon)?;
    let warnings = lag_warnings(r, false);
    Ok(TuningOutcome { params, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::Real;

    fn model(k: Real, l: Real, t: Real) -> FopdtModel {
        FopdtModel::new(k, l, t).unwrap()
    }

    #[test]
    fn iae_low_ratio_literal_case() {
        // K=1, L=2, T=10, r=0.2 < 0.3 -> Kp=6.75, Ti=5.00, Td=0.74
        let out = cohen_coon(&model(1.0, 2.0, 10.0), TuningCriterion::Iae, ControlType::Pid)
            .unwrap();
        assert!((out.params.kp - 6.75).abs() < 1e-12);
        assert!((out.params.ti - 5.0).abs() < 1e-12);
        assert!((out.params.td - 0.74).abs() < 1e-12);
        assert_eq!(out.params.method, TuningMethod::CohenCoon);
    }

    #[test]
    fn iae_high_ratio_branch() {
        // K=1, L=4, T=10, r=0.4:
        // Kp = 2.5·(4/3 + 0.1), Ti = 4·34.4/16.2, Td = 16/11.8
        let out = cohen_coon(&model(1.0, 4.0, 10.0), TuningCriterion::Iae, ControlType::Pid)
            .unwrap();
        assert!((out.params.kp - 2.5 * (4.0 / 3.0 + 0.1)).abs() < 1e-12);
        assert!((out.params.ti - 4.0 * 34.4 / 16.2).abs() < 1e-12);
        assert!((out.params.td - 16.0 / 11.8).abs() < 1e-12);
    }

    #[test]
    fn ise_coefficients() {
        let out = cohen_coon(&model(1.0, 1.0, 5.0), TuningCriterion::Ise, ControlType::Pid)
            .unwrap();
        assert!((out.params.kp - 1.495 * 5.0).abs() < 1e-12);
        assert!((out.params.ti - 1.57).abs() < 1e-12);
        assert!((out.params.td - 0.735).abs() < 1e-12);
    }

    #[test]
    fn itae_coefficients() {
        let out = cohen_coon(&model(1.0, 1.0, 5.0), TuningCriterion::Itae, ControlType::Pid)
            .unwrap();
        assert!((out.params.kp - 0.859 * 5.0).abs() < 1e-12);
        assert!((out.params.ti - 0.674).abs() < 1e-12);
        assert!((out.params.td - 0.134).abs() < 1e-12);
    }

    #[test]
    fn pi_forces_zero_derivative() {
        let out = cohen_coon(&model(1.0, 1.0, 5.0), TuningCriterion::Ise, ControlType::Pi)
            .unwrap();
        assert_eq!(out.params.td, 0.0);
        assert!((out.params.ti - 1.57).abs() < 1e-12);
    }

    #[test]
    fn pure_p_rejected() {
        let err = cohen_coon(&model(1.0, 1.0, 5.0), TuningCriterion::Iae, ControlType::P)
            .unwrap_err();
        assert!(matches!(err, TuningError::InvalidControlType { .. }));
    }

    #[test]
    fn zero_dead_time_rejected() {
        let err = cohen_coon(&model(1.0, 0.0, 5.0), TuningCriterion::Iae, ControlType::Pid)
            .unwrap_err();
        assert!(matches!(err, TuningError::InvalidModel { .. }));
    }
}

//! One-call PID design workflow.

use pf_control::{ControlType, TuningMethod};
use pf_core::Real;
use pf_ident::identify_transfer_function;
use pf_metrics::{MetricsComparison, compare_traces};
use pf_model::{FopdtModel, TransferFunction};
use pf_sim::{ComparisonTraces, SimOptions, simulate_comparison};
use pf_tuning::{TuningCriterion, TuningOutcome};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppResult;
use crate::tune::tune;

/// Inputs for the complete design workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRequest {
    /// Plant numerator coefficients, descending power.
    pub numerator: Vec<Real>,
    /// Plant denominator coefficients, descending power.
    pub denominator: Vec<Real>,
    pub method: TuningMethod,
    pub control_type: ControlType,
    /// Cohen-Coon criterion; `None` selects IAE.
    pub criterion: Option<TuningCriterion>,
    /// Setpoint for the closed-loop run and step magnitude for the open one.
    pub reference: Real,
    /// Settling band for the metrics, fraction of |reference|.
    pub tolerance: Real,
    pub sim: SimOptions,
}

impl DesignRequest {
    /// Request with the workflow defaults: Ziegler-Nichols PID, unit
    /// reference, 5% band, default simulation options.
    pub fn new(numerator: Vec<Real>, denominator: Vec<Real>) -> Self {
        Self {
            numerator,
            denominator,
            method: TuningMethod::ZieglerNichols,
            control_type: ControlType::Pid,
            criterion: None,
            reference: 1.0,
            tolerance: 0.05,
            sim: SimOptions::default(),
        }
    }
}

/// Everything the workflow produced, ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    /// FOPDT approximation identified from the plant's step response.
    pub model: FopdtModel,
    /// Tuned gains plus accuracy advisories.
    pub outcome: TuningOutcome,
    /// Open-loop and closed-loop traces over a shared horizon.
    pub traces: ComparisonTraces,
    /// Metrics for both traces.
    pub metrics: MetricsComparison,
}

/// Run the full design chain: build the plant, identify an FOPDT model,
/// tune, simulate open vs closed loop, and extract metrics.
pub fn design_pid(request: &DesignRequest) -> AppResult<DesignReport> {
    let plant = TransferFunction::new(request.numerator.clone(), request.denominator.clone())?;
    let model = identify_transfer_function(&plant)?;
    let outcome = tune(&model, request.method, request.control_type, request.criterion)?;
    let traces = simulate_comparison(&plant, &outcome.params, request.reference, &request.sim)?;
    let metrics = compare_traces(&traces.open_loop, &traces.closed_loop, request.tolerance)?;

    info!(
        method = %outcome.params.method,
        kp = outcome.params.kp,
        ti = outcome.params.ti,
        td = outcome.params.td,
        "PID design complete"
    );

    Ok(DesignReport {
        model,
        outcome,
        traces,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_on_slow_first_order_plant() {
        // 2/(10s+1): the identified model feeds ZN, and the closed loop
        // tracks the setpoint the open loop cannot reach.
        let request = DesignRequest::new(vec![2.0], vec![10.0, 1.0]);
        let report = design_pid(&request).unwrap();

        assert!((report.model.gain - 2.0).abs() < 0.05);
        assert!((report.model.time_constant - 10.0).abs() < 0.5);
        assert_eq!(report.outcome.params.method, TuningMethod::ZieglerNichols);

        // Open loop settles at dc gain (2), closed loop at the setpoint (1)
        assert!(report.metrics.open_loop.steady_state_error < -0.9);
        assert!(report.metrics.closed_loop.steady_state_error.abs() < 0.05);
    }

    #[test]
    fn invalid_plant_surfaces_model_error() {
        let request = DesignRequest::new(vec![], vec![1.0, 1.0]);
        assert!(matches!(
            design_pid(&request).unwrap_err(),
            crate::AppError::Model(_)
        ));
    }

    #[test]
    fn unstable_plant_surfaces_ident_error() {
        let request = DesignRequest::new(vec![1.0], vec![1.0, -1.0]);
        assert!(matches!(
            design_pid(&request).unwrap_err(),
            crate::AppError::Ident(_)
        ));
    }

    #[test]
    fn report_serializes_for_presentation() {
        let request = DesignRequest::new(vec![1.0], vec![2.0, 1.0]);
        let report = design_pid(&request).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let back: DesignReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.model, back.model);
        assert_eq!(report.outcome, back.outcome);
    }
}

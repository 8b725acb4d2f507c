//! Step-response performance indicators.

use pf_core::{Real, all_finite, strictly_increasing};
use pf_sim::SimulationTrace;
use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, MetricsResult};

/// Minimum number of samples a trace must carry to be measurable.
pub const MIN_SAMPLES: usize = 10;

/// Standard step-response indicators derived from one trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// First instant after which the response stays inside the tolerance
    /// band around the reference (seconds).
    pub settling_time: Real,
    /// Peak excursion beyond the reference, percent of |reference|;
    /// negative for undershoot, never clamped.
    pub overshoot_percent: Real,
    /// reference − output[last].
    pub steady_state_error: Real,
    /// Steady-state error as a percentage of the reference.
    pub steady_state_error_percent: Real,
    /// Time to go from 10% to 90% of the total rise (seconds).
    pub rise_time: Real,
    /// Maximum output value.
    pub peak_value: Real,
    /// Time of the maximum output (seconds).
    pub peak_time: Real,
    /// Absolute half-width of the settling band: tolerance·|reference|.
    pub settling_band: Real,
}

/// Extract performance metrics from a time/output trace.
///
/// # Arguments
///
/// * `time` - Sample timestamps (seconds), strictly increasing
/// * `output` - Response values, same length as `time`
/// * `reference` - Setpoint the response is measured against (non-zero)
/// * `tolerance` - Settling band as a fraction of |reference|, in (0, 1)
pub fn compute(
    time: &[Real],
    output: &[Real],
    reference: Real,
    tolerance: Real,
) -> MetricsResult<PerformanceMetrics> {
    if time.len() != output.len() {
        return Err(MetricsError::InvalidTrace {
            what: "time and output must have the same length",
        });
    }
    if time.len() < MIN_SAMPLES {
        return Err(MetricsError::InvalidTrace {
            what: "too few samples to measure",
        });
    }
    if !all_finite(time) || !all_finite(output) {
        return Err(MetricsError::InvalidTrace {
            what: "trace contains non-finite values",
        });
    }
    if !strictly_increasing(time) {
        return Err(MetricsError::InvalidTrace {
            what: "time must be strictly increasing",
        });
    }
    if !reference.is_finite() || reference == 0.0 {
        return Err(MetricsError::InvalidTrace {
            what: "reference must be non-zero",
        });
    }
    if !tolerance.is_finite() || tolerance <= 0.0 || tolerance >= 1.0 {
        return Err(MetricsError::InvalidTrace {
            what: "tolerance must lie in (0, 1)",
        });
    }

    let last = time.len() - 1;
    let y_final = output[last];

    // Peak: maximum output and its first occurrence
    let (peak_idx, peak_value) = output
        .iter()
        .copied()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal))
        .unwrap_or((0, output[0]));
    let peak_time = time[peak_idx];

    let overshoot_percent = (peak_value - reference) / reference.abs() * 100.0;

    let steady_state_error = reference - y_final;
    let steady_state_error_percent = steady_state_error / reference * 100.0;

    // Settling: first sample after the last excursion outside the band
    let settling_band = tolerance * reference.abs();
    let last_outside = output
        .iter()
        .rposition(|&y| (y - reference).abs() > settling_band);
    let settling_time = match last_outside {
        None => time[0],
        Some(idx) if idx == last => time[last],
        Some(idx) => time[idx + 1],
    };

    let rise_time = rise_time_10_90(time, output);

    Ok(PerformanceMetrics {
        settling_time,
        overshoot_percent,
        steady_state_error,
        steady_state_error_percent,
        rise_time,
        peak_value,
        peak_time,
        settling_band,
    })
}

/// Extract metrics from a simulation trace using its embedded reference.
pub fn compute_for_trace(
    trace: &SimulationTrace,
    tolerance: Real,
) -> MetricsResult<PerformanceMetrics> {
    compute(&trace.time, &trace.output, trace.reference, tolerance)
}

/// Metrics for an open-loop/closed-loop pair over the same horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsComparison {
    pub open_loop: PerformanceMetrics,
    pub closed_loop: PerformanceMetrics,
}

/// Extract metrics for both traces of a comparison run.
pub fn compare_traces(
    open_loop: &SimulationTrace,
    closed_loop: &SimulationTrace,
    tolerance: Real,
) -> MetricsResult<MetricsComparison> {
    Ok(MetricsComparison {
        open_loop: compute_for_trace(open_loop, tolerance)?,
        closed_loop: compute_for_trace(closed_loop, tolerance)?,
    })
}

/// 10%→90% rise time of the total rise output[last] − output[first], with
/// linear interpolation at both crossings. Zero for a flat trace.
fn rise_time_10_90(time: &[Real], output: &[Real]) -> Real {
    let y0 = output[0];
    let rise = output[output.len() - 1] - y0;
    if rise.abs() < 1e-9 {
        return 0.0;
    }
    let t10 = crossing_time(time, output, y0, rise, 0.1);
    let t90 = crossing_time(time, output, y0, rise, 0.9);
    match (t10, t90) {
        (Some(lo), Some(hi)) => hi - lo,
        _ => 0.0,
    }
}

/// First time the normalized progress (y − y0)/rise reaches `fraction`.
fn crossing_time(
    time: &[Real],
    output: &[Real],
    y0: Real,
    rise: Real,
    fraction: Real,
) -> Option<Real> {
    let progress = |y: Real| (y - y0) / rise;
    let idx = output.iter().position(|&y| progress(y) >= fraction)?;
    if idx == 0 {
        return Some(time[0]);
    }
    let p_lo = progress(output[idx - 1]);
    let p_hi = progress(output[idx]);
    if p_hi <= p_lo {
        return Some(time[idx]);
    }
    let frac = (fraction - p_lo) / (p_hi - p_lo);
    Some(time[idx - 1] + frac * (time[idx] - time[idx - 1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exponential_trace(n: usize, t_end: Real) -> (Vec<Real>, Vec<Real>) {
        let time: Vec<Real> = (0..n).map(|k| t_end * k as Real / (n - 1) as Real).collect();
        let output = time.iter().map(|&t| 1.0 - (-t).exp()).collect();
        (time, output)
    }

    #[test]
    fn monotone_exponential_metrics() {
        // y = 1 − e^(−t) on [0, 10], reference 1, 5% band
        let (time, output) = exponential_trace(1001, 10.0);
        let m = compute(&time, &output, 1.0, 0.05).unwrap();

        // No overshoot: the peak is the (slightly short of 1) final value
        assert!(m.overshoot_percent <= 0.0);
        assert!(m.overshoot_percent.abs() < 0.1);
        // Steady state error ~ e^(-10)
        assert!(m.steady_state_error.abs() < 1e-4);
        // 5% band entered at t = ln(20) ≈ 3.0
        assert!((m.settling_time - 3.0).abs() < 0.05);
        // Rise 10->90%: ln(9) ≈ 2.197
        assert!((m.rise_time - 2.197).abs() < 0.01);
        assert!((m.settling_band - 0.05).abs() < 1e-12);
    }

    #[test]
    fn overshoot_measured_unclamped() {
        // Synthetic trace peaking at 1.25 before settling at 1.0
        let time: Vec<Real> = (0..100).map(|k| k as Real * 0.1).collect();
        let output: Vec<Real> = time
            .iter()
            .map(|&t| 1.0 + 0.25 * (-0.5 * t).exp() * (2.0 * t).sin())
            .collect();
        let m = compute(&time, &output, 1.0, 0.05).unwrap();
        assert!(m.overshoot_percent > 5.0);
        assert!(m.peak_value > 1.05);
        assert!(m.peak_time > 0.0);
    }

    #[test]
    fn undershoot_is_negative_overshoot() {
        // Trace that never reaches the reference
        let time: Vec<Real> = (0..100).map(|k| k as Real * 0.1).collect();
        let output: Vec<Real> = time.iter().map(|&t| 0.5 * (1.0 - (-t).exp())).collect();
        let m = compute(&time, &output, 1.0, 0.05).unwrap();
        assert!(m.overshoot_percent < 0.0);
        // Never inside the band: settling time pinned to the end
        assert_eq!(m.settling_time, *time.last().unwrap());
    }

    #[test]
    fn settled_from_start() {
        let time: Vec<Real> = (0..20).map(|k| k as Real).collect();
        let output = vec![1.0; 20];
        let m = compute(&time, &output, 1.0, 0.05).unwrap();
        assert_eq!(m.settling_time, 0.0);
        assert_eq!(m.rise_time, 0.0);
    }

    #[test]
    fn validation_errors() {
        let time: Vec<Real> = (0..20).map(|k| k as Real).collect();
        let output = vec![1.0; 20];

        assert!(compute(&time[..10], &output, 1.0, 0.05).is_err());
        assert!(compute(&time[..5], &output[..5], 1.0, 0.05).is_err());
        assert!(compute(&time, &output, 0.0, 0.05).is_err());
        assert!(compute(&time, &output, 1.0, 0.0).is_err());
        assert!(compute(&time, &output, 1.0, 1.0).is_err());

        let mut bad = output.clone();
        bad[3] = Real::INFINITY;
        assert!(compute(&time, &bad, 1.0, 0.05).is_err());

        let mut back = time.clone();
        back[5] = 100.0;
        assert!(compute(&back, &output, 1.0, 0.05).is_err());
    }

    #[test]
    fn negative_reference_band() {
        // Response tracking a negative setpoint
        let time: Vec<Real> = (0..200).map(|k| k as Real * 0.05).collect();
        let output: Vec<Real> = time.iter().map(|&t| -2.0 * (1.0 - (-t).exp())).collect();
        let m = compute(&time, &output, -2.0, 0.05).unwrap();
        assert!(m.steady_state_error.abs() < 0.01);
        assert!((m.settling_band - 0.1).abs() < 1e-12);
        assert!((m.settling_time - 3.0).abs() < 0.1);
    }

    #[test]
    fn serde_round_trip() {
        let (time, output) = exponential_trace(100, 10.0);
        let m = compute(&time, &output, 1.0, 0.05).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: PerformanceMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}

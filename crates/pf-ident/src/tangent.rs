//! Tangent-method identification from a sampled step response.

use pf_core::{Real, all_finite, strictly_increasing};
use pf_model::FopdtModel;

use crate::error::{IdentError, IdentResult};

/// Minimum number of samples an identifiable trace must carry.
pub const MIN_SAMPLES: usize = 10;

/// Fraction of the total rise treated as a measurable departure from the
/// initial baseline when locating the dead time.
const DEPARTURE_FRACTION: Real = 0.01;

/// Fraction of the total rise reached after one time constant past the
/// dead time.
const TIME_CONSTANT_FRACTION: Real = 0.632;

/// Identify an FOPDT model from a sampled step response.
///
/// # Arguments
///
/// * `time` - Sample timestamps (seconds), strictly increasing
/// * `response` - System output at each timestamp
/// * `reference` - Magnitude of the applied step (non-zero)
///
/// Dead time and the 63.2% crossing are measured relative to `time[0]`, so
/// shifted time vectors identify identically. The crossing is linearly
/// interpolated between the bracketing samples.
pub fn identify_step_response(
    time: &[Real],
    response: &[Real],
    reference: Real,
) -> IdentResult<FopdtModel> {
    if time.len() != response.len() {
        return Err(IdentError::InvalidTrace {
            what: "time and response must have the same length",
        });
    }
    if time.len() < MIN_SAMPLES {
        return Err(IdentError::InvalidTrace {
            what: "too few samples to identify a model",
        });
    }
    if !all_finite(time) || !all_finite(response) {
        return Err(IdentError::InvalidTrace {
            what: "trace contains non-finite values",
        });
    }
    if !strictly_increasing(time) {
        return Err(IdentError::InvalidTrace {
            what: "time must be strictly increasing",
        });
    }
    if !reference.is_finite() || reference == 0.0 {
        return Err(IdentError::InvalidTrace {
            what: "reference step magnitude must be non-zero",
        });
    }

    let t0 = time[0];
    let y0 = response[0];
    let y_final = response[response.len() - 1];
    let rise = y_final - y0;
    if rise.abs() < 1e-9 {
        return Err(IdentError::InvalidTrace {
            what: "response shows no measurable rise",
        });
    }

    let gain = y_final / reference;

    // Dead time: first sample that departs measurably from the baseline
    let departure = DEPARTURE_FRACTION * rise.abs();
    let depart_idx = response
        .iter()
        .position(|&y| (y - y0).abs() > departure)
        .ok_or(IdentError::InvalidTrace {
            what: "response never departs from its initial value",
        })?;
    let dead_time = time[depart_idx] - t0;

    // Time constant: interpolated crossing of 63.2% of the total rise
    let t63 = crossing_time(time, response, y0, rise, TIME_CONSTANT_FRACTION)?;
    let time_constant = t63 - t0 - dead_time;
    if time_constant <= 0.0 {
        return Err(IdentError::InvalidTrace {
            what: "time constant not identifiable from the trace",
        });
    }

    Ok(FopdtModel::new(gain, dead_time, time_constant)?)
}

/// First time the normalized progress (y − y0)/rise reaches `fraction`,
/// linearly interpolated between the bracketing samples.
fn crossing_time(
    time: &[Real],
    response: &[Real],
    y0: Real,
    rise: Real,
    fraction: Real,
) -> IdentResult<Real> {
    let progress = |y: Real| (y - y0) / rise;
    let idx = response
        .iter()
        .position(|&y| progress(y) >= fraction)
        .ok_or(IdentError::InvalidTrace {
            what: "response never reaches the 63.2% rise point",
        })?;
    if idx == 0 {
        return Ok(time[0]);
    }
    let p_lo = progress(response[idx - 1]);
    let p_hi = progress(response[idx]);
    if p_hi <= p_lo {
        return Ok(time[idx]);
    }
    let frac = (fraction - p_lo) / (p_hi - p_lo);
    Ok(time[idx - 1] + frac * (time[idx] - time[idx - 1]))
}

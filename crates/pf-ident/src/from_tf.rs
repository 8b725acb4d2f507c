//! Identification of a transfer function's own step response.

use pf_model::{FopdtModel, TransferFunction};
use pf_sim::{SimOptions, simulate_open_loop};
use tracing::debug;

use crate::error::{IdentError, IdentResult};
use crate::tangent::identify_step_response;

/// Approximate an arbitrary-order transfer function by an FOPDT model.
///
/// Simulates the unit-step open-loop response (default options, settling
/// horizon auto-extended) and runs the tangent method on the result. Fails
/// with `UnstableSystem` when `tf` is not BIBO-stable, since no settling
/// value exists to identify.
pub fn identify_transfer_function(tf: &TransferFunction) -> IdentResult<FopdtModel> {
    if !tf.is_stable() {
        return Err(IdentError::UnstableSystem);
    }

    let trace = simulate_open_loop(tf, 1.0, &SimOptions::default())?;
    let model = identify_step_response(&trace.time, &trace.output, 1.0)?;
    debug!(
        gain = model.gain,
        dead_time = model.dead_time,
        time_constant = model.time_constant,
        "identified FOPDT approximation"
    );
    Ok(model)
}

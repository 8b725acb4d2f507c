//! Simulation runners and options.

use nalgebra::DVector;
use pf_control::{DiscretePid, PidParameters, PidState};
use pf_core::Real;
use pf_model::TransferFunction;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::integrator::{ForwardEuler, Integrator, Rk4};
use crate::state_space::StateSpace;
use crate::trace::SimulationTrace;

/// Upper bound on the auto-extended horizon (seconds), bounding cost for
/// very slow systems.
pub const MAX_AUTO_HORIZON: Real = 1000.0;

/// State norms beyond this abort integration as diverged.
const DIVERGENCE_BOUND: Real = 1e12;

/// Integrator selection for simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegratorType {
    /// 4th-order Runge-Kutta (default, 4 derivative calls per step).
    #[default]
    Rk4,
    /// Forward Euler (1st-order, 1 derivative call per step).
    ForwardEuler,
}

/// Options for simulation runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimOptions {
    /// Fixed time step (seconds).
    pub dt: Real,
    /// Requested final simulation time (seconds); open-loop runs may extend
    /// it to cover the settling horizon of slow systems.
    pub t_final: Real,
    /// Maximum number of steps (safety limit on allocation).
    pub max_steps: usize,
    /// Integrator type (default: RK4).
    pub integrator: IntegratorType,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 0.01,
            t_final: 50.0,
            max_steps: 1_000_000,
            integrator: IntegratorType::default(),
        }
    }
}

/// Open-loop and closed-loop runs over the same horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTraces {
    pub open_loop: SimulationTrace,
    pub closed_loop: SimulationTrace,
}

fn validate(reference: Real, opts: &SimOptions) -> SimResult<()> {
    if !reference.is_finite() {
        return Err(SimError::InvalidArg {
            what: "reference must be finite",
        });
    }
    if !opts.dt.is_finite() || opts.dt <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "dt must be positive",
        });
    }
    if !opts.t_final.is_finite() || opts.t_final <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "t_final must be positive",
        });
    }
    if opts.max_steps == 0 {
        return Err(SimError::InvalidArg {
            what: "max_steps must be positive",
        });
    }
    Ok(())
}

/// Number of integration steps covering `t_final`, guarded by `max_steps`.
fn step_count(t_final: Real, opts: &SimOptions) -> SimResult<usize> {
    let steps = (t_final / opts.dt - 1e-9).ceil() as usize;
    if steps + 1 > opts.max_steps {
        return Err(SimError::InvalidArg {
            what: "t_final/dt exceeds max_steps",
        });
    }
    Ok(steps)
}

/// Extend the requested horizon when the slowest pole implies settling
/// beyond it: ts ≈ 5/|Re(slowest pole)|, capped at `MAX_AUTO_HORIZON`.
fn effective_horizon(tf: &TransferFunction, requested: Real) -> Real {
    if let Some(re) = tf.slowest_pole_real_part() {
        if re < 0.0 {
            let settling = (5.0 / re.abs()).min(MAX_AUTO_HORIZON);
            if settling > requested {
                debug!(requested, extended = settling, "auto-extending simulation horizon");
                return settling;
            }
        }
    }
    requested
}

fn step_state(
    plant: &StateSpace,
    integrator: IntegratorType,
    x: &DVector<Real>,
    u: Real,
    dt: Real,
) -> DVector<Real> {
    match integrator {
        IntegratorType::Rk4 => Rk4.step(plant, x, u, dt),
        IntegratorType::ForwardEuler => ForwardEuler.step(plant, x, u, dt),
    }
}

fn check_state(x: &DVector<Real>, t: Real) -> SimResult<()> {
    if x.iter().all(|v| v.is_finite()) && x.norm() <= DIVERGENCE_BOUND {
        Ok(())
    } else {
        Err(SimError::Diverged { t })
    }
}

/// Simulate the step response of `tf` without a controller.
///
/// The constant input `reference` is applied from t = 0 and the plant state
/// starts at rest. Fails with `UnstableSystem` when `tf` is not BIBO-stable
/// (unbounded growth makes the result meaningless).
pub fn simulate_open_loop(
    tf: &TransferFunction,
    reference: Real,
    opts: &SimOptions,
) -> SimResult<SimulationTrace> {
    validate(reference, opts)?;
    if !tf.is_stable() {
        return Err(SimError::UnstableSystem);
    }

    let plant = StateSpace::from_transfer_function(tf)?;
    let t_final = effective_horizon(tf, opts.t_final);
    let steps = step_count(t_final, opts)?;

    let mut x = DVector::<Real>::zeros(plant.order());
    let mut time = Vec::with_capacity(steps + 1);
    let mut output = Vec::with_capacity(steps + 1);

    for k in 0..=steps {
        let t = k as Real * opts.dt;
        time.push(t);
        output.push(plant.output(&x, reference));
        if k < steps {
            x = step_state(&plant, opts.integrator, &x, reference, opts.dt);
            check_state(&x, t + opts.dt)?;
        }
    }

    Ok(SimulationTrace {
        time,
        output,
        control_signal: None,
        reference,
    })
}

/// Simulate `tf` in closed loop under a discrete PID controller.
///
/// At each sample the output is measured, the error e[k] = reference − y[k]
/// feeds the PID law, and the resulting u[k] is held (zero-order hold) while
/// the plant ODE advances one step. Feedback may stabilize an unstable
/// plant, so no open-loop stability precondition applies; runaway loops are
/// reported as `Diverged`.
pub fn simulate_closed_loop(
    tf: &TransferFunction,
    pid: &PidParameters,
    reference: Real,
    opts: &SimOptions,
) -> SimResult<SimulationTrace> {
    validate(reference, opts)?;

    let plant = StateSpace::from_transfer_function(tf)?;
    let steps = step_count(opts.t_final, opts)?;
    let controller = DiscretePid::new(*pid);

    let mut x = DVector::<Real>::zeros(plant.order());
    let mut pid_state = PidState::default();
    // Input still applied while y[k] is measured (sample, then actuate)
    let mut u_held = 0.0;

    let mut time = Vec::with_capacity(steps + 1);
    let mut output = Vec::with_capacity(steps + 1);
    let mut control = Vec::with_capacity(steps + 1);

    for k in 0..=steps {
        let t = k as Real * opts.dt;
        let y = plant.output(&x, u_held);
        let error = reference - y;
        let (next_pid_state, u) = controller.update(&pid_state, error, opts.dt);
        pid_state = next_pid_state;
        u_held = u;

        time.push(t);
        output.push(y);
        control.push(u);

        if k < steps {
            x = step_state(&plant, opts.integrator, &x, u_held, opts.dt);
            check_state(&x, t + opts.dt)?;
        }
    }

    Ok(SimulationTrace {
        time,
        output,
        control_signal: Some(control),
        reference,
    })
}

/// Convenience pairing of an open-loop and a closed-loop run sharing
/// reference, horizon, and step size.
///
/// The shared horizon is the open-loop auto-extended one, so both traces
/// cover the same time span.
pub fn simulate_comparison(
    tf: &TransferFunction,
    pid: &PidParameters,
    reference: Real,
    opts: &SimOptions,
) -> SimResult<ComparisonTraces> {
    validate(reference, opts)?;
    let shared = SimOptions {
        t_final: effective_horizon(tf, opts.t_final),
        ..opts.clone()
    };
    Ok(ComparisonTraces {
        open_loop: simulate_open_loop(tf, reference, &shared)?,
        closed_loop: simulate_closed_loop(tf, pid, reference, &shared)?,
    })
}

//! Time-domain simulation of linear SISO loops.
//!
//! Provides:
//! - controllable-canonical state-space realization of a transfer function
//! - fixed-step integrators (classical RK4, forward Euler)
//! - open-loop step-response simulation with settling-horizon auto-extension
//! - closed-loop simulation with a discrete PID in the loop (zero-order hold)
//! - `SimulationTrace` result record
//!
//! Integration is strictly fixed-step: identical inputs produce identical
//! traces. Choosing `dt` small enough for the fastest plant dynamics is the
//! caller's responsibility; a divergence guard turns a blown-up integration
//! into a typed error instead of a trace full of infinities.

pub mod error;
pub mod integrator;
pub mod sim;
pub mod state_space;
pub mod trace;

pub use error::{SimError, SimResult};
pub use integrator::{ForwardEuler, Integrator, Rk4};
pub use sim::{
    ComparisonTraces, IntegratorType, MAX_AUTO_HORIZON, SimOptions, simulate_closed_loop,
    simulate_comparison, simulate_open_loop,
};
pub use state_space::StateSpace;
pub use trace::SimulationTrace;

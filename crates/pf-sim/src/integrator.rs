//! Fixed-step time integrators.

use nalgebra::DVector;
use pf_core::Real;

use crate::state_space::StateSpace;

/// Trait for fixed-step integrators advancing a plant state one step under
/// a zero-order-hold input.
pub trait Integrator {
    /// Advance `x` by `dt` with the input `u` held constant over the step.
    fn step(&self, plant: &StateSpace, x: &DVector<Real>, u: Real, dt: Real) -> DVector<Real>;
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Copy, Debug)]
pub struct Rk4;

impl Integrator for Rk4 {
    fn step(&self, plant: &StateSpace, x: &DVector<Real>, u: Real, dt: Real) -> DVector<Real> {
        let k1 = plant.derivative(x, u);
        let k2 = plant.derivative(&(x + &k1 * (0.5 * dt)), u);
        let k3 = plant.derivative(&(x + &k2 * (0.5 * dt)), u);
        let k4 = plant.derivative(&(x + &k3 * dt), u);

        // x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
    }
}

/// Forward Euler (explicit, 1st order, one derivative call per step).
#[derive(Clone, Copy, Debug)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step(&self, plant: &StateSpace, x: &DVector<Real>, u: Real, dt: Real) -> DVector<Real> {
        x + plant.derivative(x, u) * dt
    }
}

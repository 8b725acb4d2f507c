//! FOPDT model identification from step responses.
//!
//! Implements the tangent (Miller) reaction-curve method:
//! 1. K from the final value normalized by the applied step magnitude
//! 2. L from the first measurable departure off the initial baseline
//! 3. T from the (interpolated) 63.2%-of-rise crossing, minus L
//!
//! A transfer function can also be identified directly: its own unit-step
//! response is simulated first, then fed through the same method.

pub mod error;
pub mod tangent;

mod from_tf;

pub use error::{IdentError, IdentResult};
pub use from_tf::identify_transfer_function;
pub use tangent::{MIN_SAMPLES, identify_step_response};

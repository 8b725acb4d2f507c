//! Process model value types for pidflow.
//!
//! This crate holds the representations the rest of the workspace computes
//! with:
//! - polynomial algebra (Horner evaluation, companion-matrix root finding)
//! - `TransferFunction`: rational G(s) = N(s)/D(s) with poles/zeros/
//!   stability/DC-gain queries
//! - `FopdtModel`: first-order-plus-dead-time reduced model K·e^(−Ls)/(Ts+1)
//!
//! All types are validated at construction and never mutated afterwards.

pub mod error;
pub mod fopdt;
pub mod polynomial;
pub mod transfer_function;

pub use error::{ModelError, ModelResult};
pub use fopdt::FopdtModel;
pub use transfer_function::{DC_GAIN_TOL, STABILITY_TOL, TransferFunction};

//! Rational transfer function G(s) = N(s)/D(s).

use core::fmt;

use nalgebra::Complex;
use pf_core::{Real, all_finite};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::polynomial;

/// Poles with real part above −STABILITY_TOL count as unstable, guarding
/// against roots that are numerically ≈0 from the right.
pub const STABILITY_TOL: Real = 1e-10;

/// |D(0)| below this means the DC gain is undefined (pole at the origin).
pub const DC_GAIN_TOL: Real = 1e-15;

/// A SISO transfer function in descending-power coefficient form.
///
/// `[1.0, 3.0, 2.0]` as denominator represents s² + 3s + 2. The value is
/// immutable once constructed; derived quantities (poles, zeros, DC gain)
/// are computed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferFunction {
    numerator: Vec<Real>,
    denominator: Vec<Real>,
}

impl TransferFunction {
    /// Build a transfer function from numerator and denominator coefficients.
    ///
    /// # Arguments
    ///
    /// * `numerator` - N(s) coefficients, descending power
    /// * `denominator` - D(s) coefficients, descending power
    ///
    /// Fails when either sequence is empty, any coefficient is non-finite,
    /// or the denominator is numerically all-zero.
    pub fn new(numerator: Vec<Real>, denominator: Vec<Real>) -> ModelResult<Self> {
        if numerator.is_empty() {
            return Err(ModelError::InvalidModel {
                what: "numerator must not be empty",
            });
        }
        if denominator.is_empty() {
            return Err(ModelError::InvalidModel {
                what: "denominator must not be empty",
            });
        }
        if !all_finite(&numerator) || !all_finite(&denominator) {
            return Err(ModelError::InvalidModel {
                what: "coefficients must be finite",
            });
        }
        if polynomial::trim_leading(&denominator).is_empty() {
            return Err(ModelError::InvalidModel {
                what: "denominator must not be all zeros",
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> &[Real] {
        &self.numerator
    }

    pub fn denominator(&self) -> &[Real] {
        &self.denominator
    }

    /// Denominator degree after trimming leading zeros.
    pub fn order(&self) -> usize {
        polynomial::degree(&self.denominator).unwrap_or(0)
    }

    /// Roots of the denominator polynomial.
    pub fn poles(&self) -> Vec<Complex<Real>> {
        polynomial::roots(&self.denominator)
    }

    /// Roots of the numerator polynomial.
    pub fn zeros(&self) -> Vec<Complex<Real>> {
        polynomial::roots(&self.numerator)
    }

    /// BIBO stability with the default tolerance.
    pub fn is_stable(&self) -> bool {
        self.is_stable_with(STABILITY_TOL)
    }

    /// True iff every pole's real part is < −tolerance (strict left
    /// half-plane).
    pub fn is_stable_with(&self, tolerance: Real) -> bool {
        self.poles().iter().all(|p| p.re < -tolerance)
    }

    /// DC gain N(0)/D(0).
    pub fn dc_gain(&self) -> ModelResult<Real> {
        let den_at_0 = polynomial::eval(&self.denominator, 0.0);
        if den_at_0.abs() < DC_GAIN_TOL {
            return Err(ModelError::UndefinedGain);
        }
        Ok(polynomial::eval(&self.numerator, 0.0) / den_at_0)
    }

    /// Real part of the slowest pole (the one closest to the imaginary
    /// axis), or `None` when there are no poles.
    ///
    /// The simulator's settling-horizon rule keys off this value.
    pub fn slowest_pole_real_part(&self) -> Option<Real> {
        self.poles()
            .iter()
            .map(|p| p.re)
            .max_by(Real::total_cmp)
    }
}

fn fmt_poly(f: &mut fmt::Formatter<'_>, coeffs: &[Real]) -> fmt::Result {
    let trimmed = polynomial::trim_leading(coeffs);
    if trimmed.is_empty() {
        return write!(f, "0");
    }
    let degree = trimmed.len() - 1;
    let mut first = true;
    for (i, &c) in trimmed.iter().enumerate() {
        if c == 0.0 && degree > 0 {
            continue;
        }
        let power = degree - i;
        if first {
            if c < 0.0 {
                write!(f, "-")?;
            }
            first = false;
        } else if c < 0.0 {
            write!(f, " - ")?;
        } else {
            write!(f, " + ")?;
        }
        let mag = c.abs();
        match power {
            0 => write!(f, "{mag}")?,
            _ => {
                if mag != 1.0 {
                    write!(f, "{mag} ")?;
                }
                match power {
                    1 => write!(f, "s")?,
                    _ => write!(f, "s^{power}")?,
                }
            }
        }
    }
    Ok(())
}

impl fmt::Display for TransferFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        fmt_poly(f, &self.numerator)?;
        write!(f, ") / (")?;
        fmt_poly(f, &self.denominator)?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_validates_inputs() {
        assert!(TransferFunction::new(vec![], vec![1.0, 1.0]).is_err());
        assert!(TransferFunction::new(vec![1.0], vec![]).is_err());
        assert!(TransferFunction::new(vec![1.0], vec![0.0, 0.0]).is_err());
        assert!(TransferFunction::new(vec![Real::NAN], vec![1.0, 1.0]).is_err());
        assert!(TransferFunction::new(vec![1.0], vec![Real::INFINITY, 1.0]).is_err());
        assert!(TransferFunction::new(vec![1.0], vec![1.0, 1.0]).is_ok());
    }

    #[test]
    fn first_order_pole() {
        // 1/(s+1): single pole at -1
        let tf = TransferFunction::new(vec![1.0], vec![1.0, 1.0]).unwrap();
        let poles = tf.poles();
        assert_eq!(poles.len(), 1);
        assert!((poles[0].re + 1.0).abs() < 1e-10);
        assert!(tf.is_stable());
    }

    #[test]
    fn unstable_pole_detected() {
        // 1/(s-1): pole at +1
        let tf = TransferFunction::new(vec![1.0], vec![1.0, -1.0]).unwrap();
        assert!(!tf.is_stable());
    }

    #[test]
    fn integrator_is_not_stable() {
        // 1/s: pole at the origin must not pass the strict check
        let tf = TransferFunction::new(vec![1.0], vec![1.0, 0.0]).unwrap();
        assert!(!tf.is_stable());
    }

    #[test]
    fn zeros_of_biquad() {
        // (s+2)/(s^2+3s+2)
        let tf = TransferFunction::new(vec![1.0, 2.0], vec![1.0, 3.0, 2.0]).unwrap();
        let zeros = tf.zeros();
        assert_eq!(zeros.len(), 1);
        assert!((zeros[0].re + 2.0).abs() < 1e-8);
    }

    #[test]
    fn dc_gain_analytic_cases() {
        let tf = TransferFunction::new(vec![2.0], vec![10.0, 1.0]).unwrap();
        assert!((tf.dc_gain().unwrap() - 2.0).abs() < 1e-12);

        let tf = TransferFunction::new(vec![1.0], vec![1.0, 1.0]).unwrap();
        assert!((tf.dc_gain().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn dc_gain_undefined_for_integrator() {
        let tf = TransferFunction::new(vec![1.0], vec![1.0, 0.0]).unwrap();
        assert_eq!(tf.dc_gain().unwrap_err(), ModelError::UndefinedGain);
    }

    #[test]
    fn slowest_pole_of_second_order() {
        // 1/((s+1)(s+5)): slowest pole at -1
        let tf = TransferFunction::new(vec![1.0], vec![1.0, 6.0, 5.0]).unwrap();
        let slowest = tf.slowest_pole_real_part().unwrap();
        assert!((slowest + 1.0).abs() < 1e-8);
    }

    #[test]
    fn display_renders_descending_powers() {
        let tf = TransferFunction::new(vec![1.0, 2.0], vec![1.0, 3.0, 2.0]).unwrap();
        assert_eq!(format!("{tf}"), "(s + 2) / (s^2 + 3 s + 2)");
    }
}

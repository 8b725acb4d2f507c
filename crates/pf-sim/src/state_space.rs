//! Controllable canonical state-space realization.

use nalgebra::{DMatrix, DVector};
use pf_core::Real;
use pf_model::polynomial;
use pf_model::{ModelError, TransferFunction};

use crate::error::SimResult;

/// SISO state-space realization ẋ = Ax + Bu, y = Cx + Du.
///
/// Built in controllable canonical form: with the monic denominator
/// s^n + a1·s^(n−1) + ... + an and the zero-padded normalized numerator
/// b0·s^n + b1·s^(n−1) + ... + bn,
///
/// ```text
/// A = | 0    1    0   ...  0   |    B = | 0 |
///     | 0    0    1   ...  0   |        | 0 |
///     | :    :    :    ⋱   :   |        | : |
///     |-an -a(n-1)    ... -a1  |        | 1 |
///
/// C = | bn−an·b0  ...  b1−a1·b0 |    D = b0
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StateSpace {
    a: DMatrix<Real>,
    b: DVector<Real>,
    c: DVector<Real>,
    d: Real,
}

impl StateSpace {
    /// Realize a proper transfer function.
    ///
    /// Fails with `InvalidModel` when the numerator degree exceeds the
    /// denominator degree (no proper state-space form exists).
    pub fn from_transfer_function(tf: &TransferFunction) -> SimResult<Self> {
        let den = polynomial::trim_leading(tf.denominator());
        let num = polynomial::trim_leading(tf.numerator());
        // den is non-empty by the TransferFunction invariant
        if num.len() > den.len() {
            return Err(ModelError::InvalidModel {
                what: "improper transfer function: numerator degree exceeds denominator degree",
            }
            .into());
        }

        let n = den.len() - 1;
        let lead = den[0];

        // Monic denominator coefficients a1..an and zero-padded normalized
        // numerator b0..bn, both descending.
        let a_monic: Vec<Real> = den[1..].iter().map(|c| c / lead).collect();
        let mut b_norm = vec![0.0; den.len() - num.len()];
        b_norm.extend(num.iter().map(|c| c / lead));

        let d = b_norm[0];

        let mut a = DMatrix::<Real>::zeros(n, n);
        for i in 0..n.saturating_sub(1) {
            a[(i, i + 1)] = 1.0;
        }
        for j in 0..n {
            a[(n - 1, j)] = -a_monic[n - 1 - j];
        }

        let mut b = DVector::<Real>::zeros(n);
        if n > 0 {
            b[n - 1] = 1.0;
        }

        // x1 multiplies bn − an·b0, xn multiplies b1 − a1·b0
        let mut c = DVector::<Real>::zeros(n);
        for j in 0..n {
            c[j] = b_norm[n - j] - a_monic[n - 1 - j] * d;
        }

        Ok(Self { a, b, c, d })
    }

    /// Number of states (denominator degree).
    pub fn order(&self) -> usize {
        self.c.len()
    }

    /// ẋ = Ax + Bu.
    pub fn derivative(&self, x: &DVector<Real>, u: Real) -> DVector<Real> {
        &self.a * x + &self.b * u
    }

    /// y = Cx + Du.
    pub fn output(&self, x: &DVector<Real>, u: Real) -> Real {
        self.c.dot(x) + self.d * u
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tf(num: &[Real], den: &[Real]) -> TransferFunction {
        TransferFunction::new(num.to_vec(), den.to_vec()).unwrap()
    }

    #[test]
    fn first_order_realization() {
        // K/(Ts+1) with K=2, T=4: A=[-0.25], B=[1], C=[0.5], D=0
        let ss = StateSpace::from_transfer_function(&tf(&[2.0], &[4.0, 1.0])).unwrap();
        assert_eq!(ss.order(), 1);
        let x = DVector::from_vec(vec![1.0]);
        let dx = ss.derivative(&x, 0.0);
        assert!((dx[0] + 0.25).abs() < 1e-12);
        assert!((ss.output(&x, 0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn second_order_companion_shape() {
        // 1/(s^2 + 3s + 2): bottom row of A is [-2, -3]
        let ss = StateSpace::from_transfer_function(&tf(&[1.0], &[1.0, 3.0, 2.0])).unwrap();
        assert_eq!(ss.order(), 2);
        let x = DVector::from_vec(vec![1.0, 1.0]);
        let dx = ss.derivative(&x, 0.0);
        // x1' = x2, x2' = -2*x1 - 3*x2
        assert!((dx[0] - 1.0).abs() < 1e-12);
        assert!((dx[1] + 5.0).abs() < 1e-12);
        // y = x1
        assert!((ss.output(&x, 0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn biproper_feedthrough() {
        // (s+2)/(s+1): D=1, C=[1]
        let ss = StateSpace::from_transfer_function(&tf(&[1.0, 2.0], &[1.0, 1.0])).unwrap();
        let x = DVector::from_vec(vec![0.0]);
        assert!((ss.output(&x, 3.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn pure_gain_has_no_states() {
        // 3/2: order zero, y = 1.5*u
        let ss = StateSpace::from_transfer_function(&tf(&[3.0], &[2.0])).unwrap();
        assert_eq!(ss.order(), 0);
        let x = DVector::<Real>::zeros(0);
        assert!((ss.output(&x, 2.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn improper_rejected() {
        let err = StateSpace::from_transfer_function(&tf(&[1.0, 0.0, 0.0], &[1.0, 1.0]))
            .unwrap_err();
        assert!(matches!(err, crate::SimError::Model(_)));
    }

    #[test]
    fn dead_zero_leading_numerator_is_proper() {
        // 0·s^2 + s + 1 over s^2+s+1 trims to a proper system
        let ss = StateSpace::from_transfer_function(&tf(&[0.0, 1.0, 1.0], &[1.0, 1.0, 1.0]));
        assert!(ss.is_ok());
    }
}

//! Polynomial helpers on descending-power coefficient slices.
//!
//! A slice `[c0, c1, ..., cn]` represents c0·x^n + c1·x^(n−1) + ... + cn.
//! Root finding goes through the companion matrix of the monic polynomial
//! and a Schur eigen-decomposition, the numerically stable standard choice.

use nalgebra::{Complex, DMatrix};
use pf_core::Real;

/// Coefficients with magnitude at or below this are treated as zero when
/// trimming leading terms before degree-dependent computations.
pub const COEFF_ZERO_TOL: Real = 1e-12;

/// Evaluate the polynomial at `x` (Horner's scheme).
///
/// An empty slice evaluates to 0.
pub fn eval(coeffs: &[Real], x: Real) -> Real {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Strip leading coefficients that are numerically zero.
///
/// Returns an empty slice when every coefficient is below the tolerance.
pub fn trim_leading(coeffs: &[Real]) -> &[Real] {
    let start = coeffs
        .iter()
        .position(|c| c.abs() > COEFF_ZERO_TOL)
        .unwrap_or(coeffs.len());
    &coeffs[start..]
}

/// Degree of the polynomial after trimming, or `None` for the zero polynomial.
pub fn degree(coeffs: &[Real]) -> Option<usize> {
    let trimmed = trim_leading(coeffs);
    trimmed.len().checked_sub(1)
}

/// Complex roots of the polynomial.
///
/// Degree 0 (and the zero polynomial) have no roots; degree 1 is solved
/// analytically; higher degrees use the companion-matrix eigenvalues.
pub fn roots(coeffs: &[Real]) -> Vec<Complex<Real>> {
    let trimmed = trim_leading(coeffs);
    if trimmed.len() < 2 {
        return Vec::new();
    }
    let lead = trimmed[0];
    if trimmed.len() == 2 {
        return vec![Complex::new(-trimmed[1] / lead, 0.0)];
    }

    // Monic coefficients m1..mn of x^n + m1·x^(n-1) + ... + mn
    let n = trimmed.len() - 1;
    let monic: Vec<Real> = trimmed[1..].iter().map(|c| c / lead).collect();

    // Companion matrix: ones on the subdiagonal, -m(n-i) down the last column
    let mut companion = DMatrix::<Real>::zeros(n, n);
    for i in 1..n {
        companion[(i, i - 1)] = 1.0;
    }
    for i in 0..n {
        companion[(i, n - 1)] = -monic[n - 1 - i];
    }

    companion.complex_eigenvalues().iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_reals(mut roots: Vec<Complex<Real>>) -> Vec<Real> {
        roots.sort_by(|a, b| a.re.total_cmp(&b.re));
        roots.iter().map(|r| r.re).collect()
    }

    #[test]
    fn eval_descending_powers() {
        // x^2 + 3x + 2 at x = 2 -> 12
        assert_eq!(eval(&[1.0, 3.0, 2.0], 2.0), 12.0);
        // At x = 0 the constant term survives
        assert_eq!(eval(&[1.0, 3.0, 2.0], 0.0), 2.0);
        assert_eq!(eval(&[], 5.0), 0.0);
    }

    #[test]
    fn linear_root() {
        // 2x + 4 -> root at -2
        let r = roots(&[2.0, 4.0]);
        assert_eq!(r.len(), 1);
        assert!((r[0].re + 2.0).abs() < 1e-12);
        assert_eq!(r[0].im, 0.0);
    }

    #[test]
    fn quadratic_real_roots() {
        // (x+1)(x+2) = x^2 + 3x + 2
        let r = sorted_reals(roots(&[1.0, 3.0, 2.0]));
        assert!((r[0] + 2.0).abs() < 1e-8);
        assert!((r[1] + 1.0).abs() < 1e-8);
    }

    #[test]
    fn quadratic_complex_pair() {
        // x^2 + 2x + 5 -> -1 ± 2i
        let r = roots(&[1.0, 2.0, 5.0]);
        assert_eq!(r.len(), 2);
        for root in &r {
            assert!((root.re + 1.0).abs() < 1e-8);
            assert!((root.im.abs() - 2.0).abs() < 1e-8);
        }
    }

    #[test]
    fn cubic_with_leading_zero() {
        // 0·x^3 + (x+1)(x+3) trims to a quadratic
        let r = sorted_reals(roots(&[0.0, 1.0, 4.0, 3.0]));
        assert_eq!(r.len(), 2);
        assert!((r[0] + 3.0).abs() < 1e-8);
        assert!((r[1] + 1.0).abs() < 1e-8);
    }

    #[test]
    fn constants_have_no_roots() {
        assert!(roots(&[5.0]).is_empty());
        assert!(roots(&[]).is_empty());
        assert!(roots(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn degree_after_trim() {
        assert_eq!(degree(&[0.0, 1.0, 2.0]), Some(1));
        assert_eq!(degree(&[3.0]), Some(0));
        assert_eq!(degree(&[0.0]), None);
    }
}

//! Frequency response evaluation

use ndarray::Array1;
use num_complex::Complex64;

use crate::error::Result;
use crate::math::checks::{ensure_finite, ensure_finite_complex};
use crate::math::polynomial::polyval_z_inv;

/// Evaluate the all-pass response at each angular frequency
///
/// Uses the inverse-delay convention `z_inv = e^(-jw)`:
///
/// ```text
/// H(w) = prod_k (z_inv - conj(p_k)) / (1 - p_k * z_inv)
/// ```
///
/// Each factor has unit magnitude on the unit circle when |p_k| < 1, so
/// |H(w)| = 1 up to rounding. The output has the order and length of `w`.
pub fn allpass_response(w: &[f64], poles: &[Complex64]) -> Result<Array1<Complex64>> {
    ensure_finite_complex(poles, "pole")?;
    ensure_finite(w, "frequency")?;

    let one = Complex64::new(1.0, 0.0);
    Ok(w.iter()
        .map(|&w| {
            let z_inv = Complex64::from_polar(1.0, -w);
            poles
                .iter()
                .fold(one, |h, &p| h * (z_inv - p.conj()) / (one - p * z_inv))
        })
        .collect())
}

/// Evaluate `B(z_inv) / A(z_inv)` from coefficient sequences
///
/// Polynomial counterpart of [`allpass_response`]; both agree for
/// coefficients synthesized from the same poles.
pub fn transfer_function_response(
    w: &[f64],
    feedforward: &Array1<Complex64>,
    feedback: &Array1<Complex64>,
) -> Result<Array1<Complex64>> {
    ensure_finite(w, "frequency")?;
    ensure_finite_complex(feedforward, "feedforward coefficient")?;
    ensure_finite_complex(feedback, "feedback coefficient")?;

    Ok(w.iter()
        .map(|&w| {
            let z_inv = Complex64::from_polar(1.0, -w);
            polyval_z_inv(feedforward, z_inv) / polyval_z_inv(feedback, z_inv)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::polynomial::{feedback_coefficients, feedforward_coefficients};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn grid(n: usize) -> Vec<f64> {
        (0..n).map(|i| PI * i as f64 / (n - 1) as f64).collect()
    }

    #[test]
    fn test_empty_pole_set_is_identity() {
        let h = allpass_response(&grid(16), &[]).unwrap();
        for c in h.iter() {
            assert_eq!(*c, Complex64::new(1.0, 0.0));
        }
    }

    #[test]
    fn test_unit_magnitude() {
        let poles = [
            Complex64::new(0.9, 0.1),
            Complex64::new(-0.5, 0.5),
            Complex64::new(0.0, -0.95),
        ];
        let h = allpass_response(&grid(257), &poles).unwrap();
        for c in h.iter() {
            assert_relative_eq!(c.norm(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_single_real_pole_values() {
        // H(0) = (1 - p)/(1 - p) = 1, H(pi) = (-1 - p)/(1 + p) = -1
        let h = allpass_response(&[0.0, PI], &[Complex64::new(0.5, 0.0)]).unwrap();
        assert_relative_eq!(h[0].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(h[0].im, 0.0, epsilon = 1e-12);
        assert_relative_eq!(h[1].re, -1.0, epsilon = 1e-12);
        assert_relative_eq!(h[1].im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matches_transfer_function() {
        let poles = [Complex64::new(0.3, 0.6), Complex64::new(-0.7, 0.0)];
        let a = feedback_coefficients(&poles).unwrap();
        let b = feedforward_coefficients(&a);
        let w = grid(64);

        let product = allpass_response(&w, &poles).unwrap();
        let rational = transfer_function_response(&w, &b, &a).unwrap();

        for (p, r) in product.iter().zip(rational.iter()) {
            assert_relative_eq!(p.re, r.re, epsilon = 1e-10);
            assert_relative_eq!(p.im, r.im, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(allpass_response(&[0.0], &[Complex64::new(f64::NAN, 0.0)]).is_err());
        assert!(allpass_response(&[f64::INFINITY], &[]).is_err());
    }
}

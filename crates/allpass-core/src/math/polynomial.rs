//! Polynomial algebra in the delay operator z^-1
//!
//! Coefficient sequences are indexed by delay tap: `c[t]` multiplies `z^-t`.

use ndarray::Array1;
use num_complex::Complex64;

use super::checks::ensure_finite_complex;
use crate::error::Result;

/// Expand `prod_k (1 - p_k z^-1)` into feedback (denominator) coefficients
///
/// Builds the product one pole at a time: multiplying the running
/// polynomial by `(1 - p z^-1)` keeps each term at its tap and adds
/// `-p` times it one tap later. The leading coefficient is never touched
/// after initialization, so `a[0]` is exactly `1 + 0i`, including for an
/// empty pole list.
pub fn feedback_coefficients(poles: &[Complex64]) -> Result<Array1<Complex64>> {
    ensure_finite_complex(poles, "pole")?;

    let mut coeffs = vec![Complex64::new(1.0, 0.0)];
    for &p in poles {
        let mut next = vec![Complex64::new(0.0, 0.0); coeffs.len() + 1];
        for (i, &c) in coeffs.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= c * p;
        }
        coeffs = next;
    }

    Ok(Array1::from_vec(coeffs))
}

/// Feedforward (numerator) coefficients mirrored from the feedback ones
///
/// `b[t] = conj(a[N - t])`: the feedback sequence reversed and conjugated.
pub fn feedforward_coefficients(feedback: &Array1<Complex64>) -> Array1<Complex64> {
    feedback.iter().rev().map(|c| c.conj()).collect()
}

/// Evaluate `sum_t c[t] * z_inv^t` by Horner's rule
pub fn polyval_z_inv(coeffs: &Array1<Complex64>, z_inv: Complex64) -> Complex64 {
    coeffs
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z_inv + c)
}

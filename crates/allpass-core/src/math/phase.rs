//! Phase extraction and unwrapping

use ndarray::Array1;
use num_complex::Complex64;
use std::f64::consts::PI;

use super::checks::ensure_finite_complex;
use crate::error::Result;

/// Principal phase of each sample, in (-pi, pi]
///
/// A sample that is exactly `0 + 0i` has no defined argument and is given
/// phase 0. This cannot arise from a valid all-pass response.
pub fn principal_phase(h: &[Complex64]) -> Result<Array1<f64>> {
    ensure_finite_complex(h, "response sample")?;

    Ok(h.iter()
        .map(|c| {
            if c.re == 0.0 && c.im == 0.0 {
                0.0
            } else {
                c.im.atan2(c.re)
            }
        })
        .collect())
}

/// Remove 2pi jumps from a principal-value phase sequence
///
/// Keeps a running offset that moves by -2pi whenever consecutive raw
/// samples jump up by more than pi and by +2pi whenever they drop by more
/// than pi. The first sample is left as is.
pub fn unwrap_phase(phase: &[f64]) -> Array1<f64> {
    let mut unwrapped = Array1::<f64>::zeros(phase.len());
    let mut offset = 0.0;

    for (i, &p) in phase.iter().enumerate() {
        if i > 0 {
            let delta = p - phase[i - 1];
            if delta > PI {
                offset -= 2.0 * PI;
            } else if delta < -PI {
                offset += 2.0 * PI;
            }
        }
        unwrapped[i] = p + offset;
    }

    unwrapped
}

/// Reduce an angle into (-pi, pi]
pub fn wrap_to_pi(angle: f64) -> f64 {
    let r = angle.rem_euclid(2.0 * PI);
    if r > PI {
        r - 2.0 * PI
    } else {
        r
    }
}

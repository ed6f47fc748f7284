//! Phase delay and group delay
//!
//! Both are computed from the unwrapped phase in radians against angular
//! frequency in rad/sample, giving delays in samples.

use ndarray::{s, Array1};

use crate::constants::{DC_FREQ_TOL, NEAR_ZERO, PHASE_ZERO_TOL};
use crate::error::{AllpassError, Result};
use crate::math::checks::{ensure_finite, ensure_same_len};

/// Phase delay series with its undefined samples
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseDelay {
    /// Delay in samples; undefined samples hold `NaN`
    pub values: Array1<f64>,
    /// Indices where the delay has no finite value
    pub undefined_at: Vec<usize>,
}

impl PhaseDelay {
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn is_fully_defined(&self) -> bool {
        self.undefined_at.is_empty()
    }
}

/// Phase delay `-u[i] / w[i]`
///
/// At DC (|w| below `DC_FREQ_TOL`) the quotient is 0/0 or unbounded. When
/// the unwrapped phase there is zero, the sample takes the limiting value
/// `-du/dw`, estimated with the difference to the next sample (or the
/// previous one at the end of the series); for a DC sample at index 0 this
/// equals the group delay there. When the phase at DC is nonzero the
/// delay diverges: the sample is set to `NaN` and its index recorded in
/// `undefined_at`.
pub fn phase_delay(unwrapped: &[f64], w: &[f64]) -> Result<PhaseDelay> {
    ensure_same_len(unwrapped.len(), w.len())?;
    ensure_finite(unwrapped, "phase sample")?;
    ensure_finite(w, "frequency")?;

    let n = w.len();
    let mut values = Array1::<f64>::zeros(n);
    let mut undefined_at = Vec::new();

    for i in 0..n {
        if w[i].abs() >= DC_FREQ_TOL {
            values[i] = -unwrapped[i] / w[i];
            continue;
        }

        let neighbour = if i + 1 < n {
            Some(i + 1)
        } else if i > 0 {
            Some(i - 1)
        } else {
            None
        };

        let limit = match neighbour {
            Some(j) if unwrapped[i].abs() < PHASE_ZERO_TOL && (w[j] - w[i]).abs() > NEAR_ZERO => {
                Some(-(unwrapped[j] - unwrapped[i]) / (w[j] - w[i]))
            }
            _ => None,
        };

        match limit {
            Some(v) => values[i] = v,
            None => {
                tracing::warn!(
                    index = i,
                    phase = unwrapped[i],
                    "phase delay undefined at DC"
                );
                values[i] = f64::NAN;
                undefined_at.push(i);
            }
        }
    }

    Ok(PhaseDelay {
        values,
        undefined_at,
    })
}

/// Group delay `-du/dw` by backward differences
///
/// `gd[i] = -(u[i] - u[i-1]) / (w[i] - w[i-1])` for i >= 1. A repeated
/// frequency carries the previous value forward; samples before the first
/// distinct pair (including `gd[0]`) take the first well-defined value.
/// Needs at least two distinct frequencies.
pub fn group_delay(unwrapped: &[f64], w: &[f64]) -> Result<Array1<f64>> {
    ensure_same_len(unwrapped.len(), w.len())?;
    ensure_finite(unwrapped, "phase sample")?;
    ensure_finite(w, "frequency")?;

    let n = w.len();
    if n < 2 {
        return Err(AllpassError::InsufficientSamples { needed: 2, got: n });
    }

    let mut gd = Array1::<f64>::zeros(n);
    let mut first_defined = None;
    for i in 1..n {
        let dw = w[i] - w[i - 1];
        if dw.abs() < NEAR_ZERO {
            gd[i] = gd[i - 1];
            continue;
        }
        gd[i] = -(unwrapped[i] - unwrapped[i - 1]) / dw;
        first_defined.get_or_insert(i);
    }

    // every frequency identical
    let first = first_defined.ok_or(AllpassError::InsufficientSamples { needed: 2, got: 1 })?;
    let lead = gd[first];
    gd.slice_mut(s![..first]).fill(lead);

    Ok(gd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_phase_delays() {
        // A pure 3-sample delay: u = -3w
        let w: Vec<f64> = (0..10).map(|i| 0.1 * i as f64).collect();
        let u: Vec<f64> = w.iter().map(|&w| -3.0 * w).collect();

        let gd = group_delay(&u, &w).unwrap();
        let pd = phase_delay(&u, &w).unwrap();

        for i in 0..w.len() {
            assert_relative_eq!(gd[i], 3.0, epsilon = 1e-12);
            assert_relative_eq!(pd.values[i], 3.0, epsilon = 1e-12);
        }
        assert!(pd.is_fully_defined());
    }

    #[test]
    fn test_group_delay_first_sample_duplicates_second() {
        let w = [0.0, 0.5, 1.0];
        let u = [0.0, -0.25, -1.0];
        let gd = group_delay(&u, &w).unwrap();

        assert_relative_eq!(gd[1], 0.5, epsilon = 1e-15);
        assert_relative_eq!(gd[2], 1.5, epsilon = 1e-15);
        assert_eq!(gd[0], gd[1]);
    }

    #[test]
    fn test_phase_delay_dc_nonzero_phase_is_undefined() {
        let w = [0.0, 0.5];
        let u = [0.3, 0.1];
        let pd = phase_delay(&u, &w).unwrap();

        assert!(pd.values[0].is_nan());
        assert_eq!(pd.undefined_at, vec![0]);
        assert_relative_eq!(pd.values[1], -0.2, epsilon = 1e-15);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            group_delay(&[0.0, 1.0], &[0.0, 1.0, 2.0]),
            Err(AllpassError::LengthMismatch { phase: 2, frequency: 3 })
        ));
        assert!(matches!(
            phase_delay(&[0.0], &[]),
            Err(AllpassError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_group_delay_needs_two_samples() {
        assert!(matches!(
            group_delay(&[0.0], &[0.0]),
            Err(AllpassError::InsufficientSamples { needed: 2, got: 1 })
        ));
    }

    #[test]
    fn test_repeated_frequency_carries_value() {
        let w = [0.0, 0.5, 0.5, 1.0];
        let u = [0.0, -1.0, -1.0, -2.0];
        let gd = group_delay(&u, &w).unwrap();
        assert_relative_eq!(gd[2], gd[1]);
        assert!(gd.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_leading_repeated_frequency_takes_first_defined_delay() {
        let w = [0.0, 0.0, 0.1, 0.2];
        let u = [0.0, 0.0, -0.2, -0.4];
        let gd = group_delay(&u, &w).unwrap();

        for v in gd.iter() {
            assert_relative_eq!(*v, 2.0, epsilon = 1e-12);
        }

        assert!(matches!(
            group_delay(&[0.0, 0.0], &[0.3, 0.3]),
            Err(AllpassError::InsufficientSamples { .. })
        ));
    }
}

//! Input validation shared by the kernel stages

use num_complex::Complex64;

use crate::error::{AllpassError, Result};

/// Fail on the first complex value with a NaN or infinite component
pub fn ensure_finite_complex<'a>(
    values: impl IntoIterator<Item = &'a Complex64>,
    what: &'static str,
) -> Result<()> {
    match values
        .into_iter()
        .position(|c| !(c.re.is_finite() && c.im.is_finite()))
    {
        Some(index) => Err(AllpassError::Validation { what, index }),
        None => Ok(()),
    }
}

/// Fail on the first NaN or infinite real value
pub fn ensure_finite<'a>(values: impl IntoIterator<Item = &'a f64>, what: &'static str) -> Result<()> {
    match values.into_iter().position(|v| !v.is_finite()) {
        Some(index) => Err(AllpassError::Validation { what, index }),
        None => Ok(()),
    }
}

/// Fail unless two series have the same length
pub fn ensure_same_len(phase: usize, frequency: usize) -> Result<()> {
    if phase != frequency {
        return Err(AllpassError::LengthMismatch { phase, frequency });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_complex() {
        let ok = [Complex64::new(1.0, -2.0), Complex64::new(0.0, 0.0)];
        assert!(ensure_finite_complex(&ok, "pole").is_ok());

        let bad = [Complex64::new(1.0, 0.0), Complex64::new(0.0, f64::INFINITY)];
        assert!(matches!(
            ensure_finite_complex(&bad, "pole"),
            Err(AllpassError::Validation { what: "pole", index: 1 })
        ));
    }

    #[test]
    fn test_finite_real() {
        assert!(ensure_finite(&[0.0, 1.0], "frequency").is_ok());
        assert!(ensure_finite(&[f64::NAN], "frequency").is_err());
    }

    #[test]
    fn test_same_len() {
        assert!(ensure_same_len(3, 3).is_ok());
        assert!(matches!(
            ensure_same_len(2, 3),
            Err(AllpassError::LengthMismatch { phase: 2, frequency: 3 })
        ));
    }
}

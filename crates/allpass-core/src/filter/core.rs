//! Core AllpassFilter struct and constructors

use ndarray::Array1;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::analysis::AllpassAnalysis;
use super::response::{allpass_response, transfer_function_response};
use crate::constants::DEFAULT_SAMPLE_RATE;
use crate::error::{AllpassError, Result};
use crate::export::CoefficientTable;
use crate::frequency::FrequencyAxis;
use crate::math::polynomial::{feedback_coefficients, feedforward_coefficients};
use crate::poles::{effective_poles, validate_positions, EffectivePole, PoleSet};

/// Design-wide options threaded through every stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignOptions {
    /// Close the pole set under conjugation so the impulse response is real
    pub enforce_real_output: bool,
    /// Sample rate in Hz, used only for unit conversion
    pub sample_rate: f64,
}

impl DesignOptions {
    /// Check the sample rate is finite and positive
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate.is_finite() && self.sample_rate > 0.0 {
            Ok(())
        } else {
            Err(AllpassError::InvalidSampleRate {
                sample_rate: self.sample_rate,
            })
        }
    }
}

impl Default for DesignOptions {
    fn default() -> Self {
        Self {
            enforce_real_output: true,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

/// A discrete-time all-pass filter defined by its poles
#[derive(Debug, Clone)]
pub struct AllpassFilter {
    /// Effective poles (user poles plus conjugate companions)
    poles: Vec<EffectivePole>,
    /// Feedback (denominator) coefficients, a[0] = 1
    feedback: Array1<Complex64>,
    /// Feedforward (numerator) coefficients, b[t] = conj(a[N - t])
    feedforward: Array1<Complex64>,
    options: DesignOptions,
}

impl AllpassFilter {
    /// Build a filter from a pole set
    ///
    /// Fails on repeated pole ids, an invalid sample rate, or any pole that
    /// is non-finite or not strictly inside the unit disc; see
    /// [`PoleSet::clamped`] for callers that prefer to rescale.
    pub fn new(poles: &PoleSet, options: DesignOptions) -> Result<Self> {
        poles.check_unique_ids()?;
        Self::from_positions(&poles.positions(), options)
    }

    /// Build a filter from bare positions
    ///
    /// Effective poles record their origin by index into `positions`.
    pub fn from_positions(positions: &[Complex64], options: DesignOptions) -> Result<Self> {
        options.validate()?;
        validate_positions(positions)?;

        let effective = effective_poles(positions, options.enforce_real_output);
        let effective_positions: Vec<Complex64> = effective.iter().map(|p| p.position).collect();
        let feedback = feedback_coefficients(&effective_positions)?;
        let feedforward = feedforward_coefficients(&feedback);

        tracing::debug!(
            poles = positions.len(),
            order = effective.len(),
            enforce_real_output = options.enforce_real_output,
            "synthesized all-pass coefficients"
        );

        Ok(Self {
            poles: effective,
            feedback,
            feedforward,
            options,
        })
    }

    /// Effective poles, user poles first
    #[inline]
    pub fn effective_poles(&self) -> &[EffectivePole] {
        &self.poles
    }

    /// Effective pole positions
    pub fn positions(&self) -> Vec<Complex64> {
        self.poles.iter().map(|p| p.position).collect()
    }

    /// Filter order (number of effective poles)
    #[inline]
    pub fn order(&self) -> usize {
        self.poles.len()
    }

    #[inline]
    pub fn options(&self) -> DesignOptions {
        self.options
    }

    /// Feedback (denominator) coefficients
    #[inline]
    pub fn feedback(&self) -> &Array1<Complex64> {
        &self.feedback
    }

    /// Feedforward (numerator) coefficients
    #[inline]
    pub fn feedforward(&self) -> &Array1<Complex64> {
        &self.feedforward
    }

    /// Coefficient table for display and export
    pub fn coefficients(&self) -> CoefficientTable {
        CoefficientTable::new(
            self.feedforward.clone(),
            self.feedback.clone(),
            self.options.enforce_real_output,
        )
    }

    /// Complex response at each frequency of `axis`
    pub fn frequency_response(&self, axis: &FrequencyAxis) -> Result<Array1<Complex64>> {
        allpass_response(axis.w(), &self.positions())
    }

    /// Response evaluated from the coefficient polynomials instead of the poles
    pub fn transfer_function_response(&self, axis: &FrequencyAxis) -> Result<Array1<Complex64>> {
        transfer_function_response(axis.w(), &self.feedforward, &self.feedback)
    }

    /// Run the full phase analysis over `axis`
    pub fn analyze(&self, axis: &FrequencyAxis) -> Result<AllpassAnalysis> {
        AllpassAnalysis::compute(self, axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poles::{Pole, PoleId};

    #[test]
    fn test_default_options() {
        let opts = DesignOptions::default();
        assert!(opts.enforce_real_output);
        assert_eq!(opts.sample_rate, 48_000.0);
    }

    #[test]
    fn test_empty_filter() {
        let filter = AllpassFilter::new(&PoleSet::new(), DesignOptions::default()).unwrap();
        assert_eq!(filter.order(), 0);
        assert_eq!(filter.feedback().to_vec(), vec![Complex64::new(1.0, 0.0)]);
        assert_eq!(filter.feedforward().to_vec(), vec![Complex64::new(1.0, 0.0)]);
    }

    #[test]
    fn test_enforcement_doubles_complex_poles() {
        let mut poles = PoleSet::new();
        poles.push(Pole::new(PoleId(1), Complex64::new(0.0, 0.5))).unwrap();
        poles.push(Pole::new(PoleId(2), Complex64::new(0.5, 0.0))).unwrap();

        let real = AllpassFilter::new(&poles, DesignOptions::default()).unwrap();
        assert_eq!(real.order(), 3);

        let opts = DesignOptions {
            enforce_real_output: false,
            ..Default::default()
        };
        let complex = AllpassFilter::new(&poles, opts).unwrap();
        assert_eq!(complex.order(), 2);
    }

    #[test]
    fn test_rejects_pole_on_unit_circle() {
        let err = AllpassFilter::from_positions(&[Complex64::new(0.0, 1.0)], DesignOptions::default());
        assert!(matches!(err, Err(AllpassError::PoleOutsideUnitDisc { index: 0, .. })));
    }

    #[test]
    fn test_rejects_invalid_sample_rate() {
        let pole = [Complex64::new(0.5, 0.0)];
        for sample_rate in [0.0, -48_000.0, f64::NAN, f64::INFINITY] {
            let opts = DesignOptions {
                sample_rate,
                ..Default::default()
            };
            assert!(matches!(
                AllpassFilter::from_positions(&pole, opts),
                Err(AllpassError::InvalidSampleRate { .. })
            ));
        }
    }
}

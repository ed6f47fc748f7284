//! Full phase analysis of an all-pass filter over a frequency axis

use ndarray::Array1;
use num_complex::Complex64;

use super::core::AllpassFilter;
use super::delay::{group_delay, phase_delay, PhaseDelay};
use crate::constants::ALLPASS_MAGNITUDE_TOL;
use crate::error::Result;
use crate::frequency::FrequencyAxis;
use crate::math::conversions::complex_2_magnitude;
use crate::math::phase::{principal_phase, unwrap_phase};

/// Every series derived from one evaluation of the response
///
/// All series have one sample per frequency of the axis they were
/// computed on.
#[derive(Debug, Clone)]
pub struct AllpassAnalysis {
    /// Angular frequencies in rad/sample
    pub w: Array1<f64>,
    /// Complex response H(w)
    pub response: Array1<Complex64>,
    /// |H(w)|, nominally 1
    pub magnitude: Array1<f64>,
    /// Principal phase in (-pi, pi]
    pub phase: Array1<f64>,
    /// Continuous phase in radians
    pub unwrapped_phase: Array1<f64>,
    /// Phase delay in samples
    pub phase_delay: PhaseDelay,
    /// Group delay in samples
    pub group_delay: Array1<f64>,
    /// Sample rate carried over from the design options
    pub sample_rate: f64,
}

impl AllpassAnalysis {
    /// Evaluate the response and derive phase and delay series
    ///
    /// Needs an axis of at least two samples for the group delay.
    pub fn compute(filter: &AllpassFilter, axis: &FrequencyAxis) -> Result<Self> {
        let w = axis.w();
        let response = filter.frequency_response(axis)?;
        let phase = principal_phase(&response.to_vec())?;
        let unwrapped_phase = unwrap_phase(&phase.to_vec());
        let unwrapped = unwrapped_phase.to_vec();
        let phase_delay = phase_delay(&unwrapped, w)?;
        let group_delay = group_delay(&unwrapped, w)?;
        let magnitude = response.mapv(complex_2_magnitude);

        tracing::debug!(
            npoints = w.len(),
            order = filter.order(),
            undefined_phase_delay = phase_delay.undefined_at.len(),
            "computed all-pass analysis"
        );

        Ok(Self {
            w: Array1::from_vec(w.to_vec()),
            response,
            magnitude,
            phase,
            unwrapped_phase,
            phase_delay,
            group_delay,
            sample_rate: filter.options().sample_rate,
        })
    }

    /// Number of frequency samples
    #[inline]
    pub fn npoints(&self) -> usize {
        self.w.len()
    }

    /// Largest deviation of |H(w)| from 1
    pub fn max_magnitude_error(&self) -> f64 {
        self.magnitude
            .iter()
            .map(|m| (m - 1.0).abs())
            .fold(0.0, f64::max)
    }

    /// Check the unit-magnitude property
    ///
    /// Uses `ALLPASS_MAGNITUDE_TOL` when `tol` is None.
    pub fn is_allpass(&self, tol: Option<f64>) -> bool {
        self.max_magnitude_error() <= tol.unwrap_or(ALLPASS_MAGNITUDE_TOL)
    }
}

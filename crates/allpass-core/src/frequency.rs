//! Frequency module - the sampled angular frequency axis
//!
//! Provides the normalized angular frequency vector (radians per sample,
//! covering [0, pi]) that every response and delay series is paired with.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::math::conversions::{hz_2_rad_per_sample, rad_per_sample_2_hz};

/// Display unit for the frequency axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrequencyUnit {
    /// Normalized angular frequency, radians per sample
    #[default]
    #[serde(rename = "rads-per-sample")]
    RadPerSample,
    /// Cycles per second at a given sample rate
    #[serde(rename = "hz")]
    Hz,
}

impl FrequencyUnit {
    /// Convert an angular frequency in rad/sample to this unit
    pub fn convert(&self, w: f64, sample_rate: f64) -> f64 {
        match self {
            FrequencyUnit::RadPerSample => w,
            FrequencyUnit::Hz => rad_per_sample_2_hz(w, sample_rate),
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rad/sample" | "rads-per-sample" | "rad" => Some(FrequencyUnit::RadPerSample),
            "hz" => Some(FrequencyUnit::Hz),
            _ => None,
        }
    }

    /// Axis label
    pub fn label(&self) -> &'static str {
        match self {
            FrequencyUnit::RadPerSample => "rad/sample",
            FrequencyUnit::Hz => "Hz",
        }
    }
}

/// Sweep type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepType {
    #[default]
    Linear,
    Log,
}

impl SweepType {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "linear" | "lin" => Some(SweepType::Linear),
            "log" | "logarithmic" => Some(SweepType::Log),
            _ => None,
        }
    }
}

/// A sampled angular frequency axis over [0, pi]
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyAxis {
    /// Angular frequencies in rad/sample
    w: Vec<f64>,
    /// Sweep type (linear or log)
    sweep_type: SweepType,
}

impl FrequencyAxis {
    /// Create an axis with `npoints` samples
    ///
    /// A linear sweep runs from 0 to pi inclusive. A log sweep cannot start
    /// at DC, so it runs geometrically from `pi / npoints` (the first nonzero
    /// bin of a linear grid of the same size) up to pi.
    ///
    /// # Example
    /// ```
    /// use allpass_core::frequency::{FrequencyAxis, SweepType};
    /// let axis = FrequencyAxis::new(512, SweepType::Linear);
    /// assert_eq!(axis.npoints(), 512);
    /// ```
    pub fn new(npoints: usize, sweep_type: SweepType) -> Self {
        let w = match (sweep_type, npoints) {
            (_, 0) => Vec::new(),
            (SweepType::Linear, 1) => vec![0.0],
            (SweepType::Linear, n) => {
                let step = PI / (n - 1) as f64;
                let mut w: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();
                w[n - 1] = PI;
                w
            }
            (SweepType::Log, 1) => vec![PI],
            (SweepType::Log, n) => {
                let log_start = (PI / n as f64).ln();
                let log_stop = PI.ln();
                let log_step = (log_stop - log_start) / (n - 1) as f64;
                let mut w: Vec<f64> = (0..n)
                    .map(|i| (log_start + i as f64 * log_step).exp())
                    .collect();
                w[n - 1] = PI;
                w
            }
        };

        Self { w, sweep_type }
    }

    /// Create from a caller-supplied angular frequency vector
    pub fn from_w(w: Vec<f64>) -> Self {
        Self {
            w,
            sweep_type: SweepType::Linear, // default, actual sweep type unknown
        }
    }

    /// Create from frequencies in Hz at `sample_rate`
    pub fn from_hz(f: &[f64], sample_rate: f64) -> Self {
        Self::from_w(f.iter().map(|&f| hz_2_rad_per_sample(f, sample_rate)).collect())
    }

    /// Angular frequencies in rad/sample
    #[inline]
    pub fn w(&self) -> &[f64] {
        &self.w
    }

    /// Frequencies converted to `unit`
    pub fn w_scaled(&self, unit: FrequencyUnit, sample_rate: f64) -> Vec<f64> {
        self.w
            .iter()
            .map(|&w| unit.convert(w, sample_rate))
            .collect()
    }

    /// Get the number of frequency points
    #[inline]
    pub fn npoints(&self) -> usize {
        self.w.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w.is_empty()
    }

    /// First angular frequency
    #[inline]
    pub fn start(&self) -> f64 {
        *self.w.first().unwrap_or(&0.0)
    }

    /// Last angular frequency
    #[inline]
    pub fn stop(&self) -> f64 {
        *self.w.last().unwrap_or(&0.0)
    }

    /// Get the sweep type
    #[inline]
    pub fn sweep_type(&self) -> SweepType {
        self.sweep_type
    }
}

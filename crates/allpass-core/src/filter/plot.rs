//! Plot-ready series in display units

use serde::{Deserialize, Serialize};

use super::analysis::AllpassAnalysis;
use crate::constants::DEFAULT_RESOLUTION;
use crate::frequency::{FrequencyAxis, FrequencyUnit, SweepType};
use crate::math::conversions::{radian_2_degree, samples_2_seconds};

/// Which series to plot against frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlotDisplay {
    Phase,
    #[default]
    PhaseDelay,
    GroupDelay,
}

impl PlotDisplay {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "phase" => Some(PlotDisplay::Phase),
            "phase-delay" | "phase_delay" => Some(PlotDisplay::PhaseDelay),
            "group-delay" | "group_delay" => Some(PlotDisplay::GroupDelay),
            _ => None,
        }
    }
}

/// Unit for phase values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PhaseUnit {
    #[default]
    #[serde(rename = "rads")]
    Radians,
    #[serde(rename = "degrees")]
    Degrees,
}

/// Unit for delay values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelayUnit {
    #[default]
    Samples,
    Seconds,
}

/// Plot configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlotOptions {
    pub display: PlotDisplay,
    /// Log-spaced frequency axis
    pub log_scale: bool,
    /// Number of frequency samples
    pub resolution: usize,
    pub x_units: FrequencyUnit,
    /// Saved as `yUnits`; only phase plots have a choice of y unit there
    #[serde(rename = "yUnits", alias = "phaseUnits")]
    pub phase_units: PhaseUnit,
    pub delay_units: DelayUnit,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            display: PlotDisplay::default(),
            log_scale: false,
            resolution: DEFAULT_RESOLUTION,
            x_units: FrequencyUnit::default(),
            phase_units: PhaseUnit::default(),
            delay_units: DelayUnit::default(),
        }
    }
}

impl PlotOptions {
    /// Frequency axis matching the resolution and scale
    pub fn frequency_axis(&self) -> FrequencyAxis {
        let sweep = if self.log_scale {
            SweepType::Log
        } else {
            SweepType::Linear
        };
        FrequencyAxis::new(self.resolution, sweep)
    }

    /// Y axis label for the selected display
    pub fn y_label(&self) -> &'static str {
        match (self.display, self.phase_units, self.delay_units) {
            (PlotDisplay::Phase, PhaseUnit::Radians, _) => "phase (rad)",
            (PlotDisplay::Phase, PhaseUnit::Degrees, _) => "phase (deg)",
            (PlotDisplay::PhaseDelay, _, DelayUnit::Samples) => "phase delay (samples)",
            (PlotDisplay::PhaseDelay, _, DelayUnit::Seconds) => "phase delay (s)",
            (PlotDisplay::GroupDelay, _, DelayUnit::Samples) => "group delay (samples)",
            (PlotDisplay::GroupDelay, _, DelayUnit::Seconds) => "group delay (s)",
        }
    }
}

/// An (x, y) series ready for plotting
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

impl AllpassAnalysis {
    /// Convert the selected series to display units
    ///
    /// Points with no finite value in display units (an undefined DC phase
    /// delay) are left out, as are non-positive frequencies on a log-scaled
    /// axis.
    pub fn plot_series(&self, options: &PlotOptions) -> PlotSeries {
        let fs = self.sample_rate;
        let values = match options.display {
            PlotDisplay::Phase => &self.unwrapped_phase,
            PlotDisplay::PhaseDelay => &self.phase_delay.values,
            PlotDisplay::GroupDelay => &self.group_delay,
        };

        let to_display = |v: f64| match (options.display, options.phase_units, options.delay_units) {
            (PlotDisplay::Phase, PhaseUnit::Radians, _) => v,
            (PlotDisplay::Phase, PhaseUnit::Degrees, _) => radian_2_degree(v),
            (_, _, DelayUnit::Samples) => v,
            (_, _, DelayUnit::Seconds) => samples_2_seconds(v, fs),
        };

        let (x, y) = self
            .w
            .iter()
            .zip(values.iter())
            .filter(|&(&w, _)| !options.log_scale || w > 0.0)
            .map(|(&w, &v)| (options.x_units.convert(w, fs), to_display(v)))
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .unzip();

        PlotSeries {
            x,
            y,
            x_label: options.x_units.label(),
            y_label: options.y_label(),
        }
    }
}

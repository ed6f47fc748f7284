//! Saved design state
//!
//! A design is its pole set plus the design and plot options. The state is
//! exchanged as JSON text; reading and writing files is left to the caller.
//!
//! On the wire the plot options sit inside `options`, next to the design
//! flags, and the editor's id counter is carried along untouched:
//!
//! ```text
//! { "poles": [{"id": 1, "pos": {"real": 0.5, "imag": 0.0}}],
//!   "options": { "enforceRealOutput": true, "sampleRate": 48000,
//!                "plotOptions": { "display": "phase-delay", ... } },
//!   "idCounter": 2 }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AllpassError, Result};
use crate::filter::{AllpassFilter, DesignOptions, PlotOptions};
use crate::frequency::FrequencyAxis;
use crate::poles::PoleSet;

/// Everything needed to restore a design
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StateFile", into = "StateFile")]
pub struct DesignState {
    pub poles: PoleSet,
    pub options: DesignOptions,
    pub plot_options: PlotOptions,
    /// Next id the editor will hand out; never read by the kernel
    pub id_counter: Option<u64>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateFile {
    poles: PoleSet,
    #[serde(default)]
    options: OptionsFile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id_counter: Option<u64>,
}

#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptionsFile {
    #[serde(flatten)]
    design: DesignOptions,
    #[serde(default)]
    plot_options: PlotOptions,
}

impl From<StateFile> for DesignState {
    fn from(file: StateFile) -> Self {
        Self {
            poles: file.poles,
            options: file.options.design,
            plot_options: file.options.plot_options,
            id_counter: file.id_counter,
        }
    }
}

impl From<DesignState> for StateFile {
    fn from(state: DesignState) -> Self {
        Self {
            poles: state.poles,
            options: OptionsFile {
                design: state.options,
                plot_options: state.plot_options,
            },
            id_counter: state.id_counter,
        }
    }
}

impl DesignState {
    pub fn new(poles: PoleSet, options: DesignOptions, plot_options: PlotOptions) -> Self {
        Self {
            poles,
            options,
            plot_options,
            id_counter: None,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a saved state
    ///
    /// Non-finite poles, repeated pole ids and an invalid sample rate are
    /// rejected. Poles on or outside the unit circle are pulled back inside
    /// it rather than failing the whole load.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut state: DesignState = serde_json::from_str(json)?;

        if let Some(index) = state.poles.iter().position(|p| !p.is_finite()) {
            return Err(AllpassError::Validation { what: "pole", index });
        }
        state.poles.check_unique_ids()?;
        state.options.validate()?;
        state.poles = state.poles.clamped();

        tracing::debug!(poles = state.poles.len(), "loaded design state");
        Ok(state)
    }

    /// Build the filter this state describes
    pub fn filter(&self) -> Result<AllpassFilter> {
        AllpassFilter::new(&self.poles, self.options)
    }

    /// Frequency axis for the saved plot options
    pub fn frequency_axis(&self) -> FrequencyAxis {
        self.plot_options.frequency_axis()
    }
}

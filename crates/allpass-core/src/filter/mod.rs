//! Filter module - the all-pass filter and its frequency-domain analysis
//!
//! Provides the `AllpassFilter` built from a pole set, the frequency
//! response evaluator, the delay calculators and plot-ready series.

mod analysis;
mod core;
mod delay;
mod plot;
mod response;

pub use analysis::AllpassAnalysis;
pub use core::{AllpassFilter, DesignOptions};
pub use delay::{group_delay, phase_delay, PhaseDelay};
pub use plot::{DelayUnit, PhaseUnit, PlotDisplay, PlotOptions, PlotSeries};
pub use response::{allpass_response, transfer_function_response};

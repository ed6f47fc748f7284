//! allpass-core: discrete-time all-pass filter design kernel
//!
//! Turns a set of poles inside the unit disc into a cascaded all-pass
//! filter and analyses its phase behaviour.
//!
//! ## Modules
//!
//! - `poles` - Pole set and conjugate closure for real-valued output
//! - `filter` - Coefficient synthesis, frequency response, phase and delay analysis
//! - `frequency` - Sampled angular frequency axis
//! - `math` - Polynomial expansion, phase unwrapping, unit conversions
//! - `export` - Coefficient tables and text export
//! - `state` - JSON design state

pub mod constants;
pub mod error;
pub mod export;
pub mod filter;
pub mod frequency;
pub mod math;
pub mod poles;
pub mod state;

pub use error::{AllpassError, Result};
pub use export::CoefficientTable;
pub use filter::{AllpassAnalysis, AllpassFilter, DesignOptions, PlotOptions};
pub use frequency::{FrequencyAxis, SweepType};
pub use poles::{Pole, PoleId, PoleSet};
pub use state::DesignState;

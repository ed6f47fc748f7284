//! Python bindings for allpass-core
//!
//! This module exposes the all-pass designer kernel to Python via PyO3.
//!
//! ## Classes
//!
//! - `FrequencyAxis` - Sampled angular frequency axis
//! - `AllpassFilter` - All-pass filter built from pole positions
//! - `AllpassAnalysis` - Phase, phase delay and group delay series

use pyo3::prelude::*;

mod filter;
mod frequency;

pub use filter::{PyAllpassAnalysis, PyAllpassFilter};
pub use frequency::PyFrequencyAxis;

/// allpass_python - all-pass filter design in Rust
///
/// Example:
///     >>> import numpy as np
///     >>> import allpass_python as ap
///     >>> filt = ap.AllpassFilter(np.array([0.5j]))
///     >>> filt.feedback
///     array([1.  +0.j, 0.  +0.j, 0.25+0.j])
///     >>> gd = filt.analyze(ap.FrequencyAxis(512)).group_delay
#[pymodule]
fn allpass_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyFrequencyAxis>()?;
    m.add_class::<PyAllpassFilter>()?;
    m.add_class::<PyAllpassAnalysis>()?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}

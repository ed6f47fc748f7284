//! Python bindings for the frequency axis

use allpass_core::frequency::{FrequencyAxis, FrequencyUnit, SweepType};
use numpy::{PyArray1, ToPyArray};
use pyo3::prelude::*;

/// Python wrapper for FrequencyAxis
#[pyclass(name = "FrequencyAxis")]
#[derive(Clone)]
pub struct PyFrequencyAxis {
    inner: FrequencyAxis,
}

#[pymethods]
impl PyFrequencyAxis {
    /// Create an angular frequency axis over [0, pi]
    ///
    /// Args:
    ///     npoints: Number of frequency points
    ///     sweep_type: Sweep type ('linear' or 'log')
    #[new]
    #[pyo3(signature = (npoints=512, sweep_type="linear"))]
    pub fn new(npoints: usize, sweep_type: &str) -> PyResult<Self> {
        let sweep = SweepType::from_str(sweep_type).ok_or_else(|| {
            pyo3::exceptions::PyValueError::new_err(format!(
                "Invalid sweep type: {}. Use 'linear' or 'log'",
                sweep_type
            ))
        })?;

        Ok(Self {
            inner: FrequencyAxis::new(npoints, sweep),
        })
    }

    /// Angular frequencies in rad/sample as numpy array
    #[getter]
    pub fn w<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.w().to_pyarray(py)
    }

    /// Frequencies in Hz at the given sample rate
    pub fn w_hz<'py>(&self, py: Python<'py>, sample_rate: f64) -> Bound<'py, PyArray1<f64>> {
        self.inner
            .w_scaled(FrequencyUnit::Hz, sample_rate)
            .to_pyarray(py)
    }

    /// Number of frequency points
    #[getter]
    pub fn npoints(&self) -> usize {
        self.inner.npoints()
    }

    /// Sweep type as string
    #[getter]
    pub fn sweep_type(&self) -> &str {
        match self.inner.sweep_type() {
            SweepType::Linear => "linear",
            SweepType::Log => "log",
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "FrequencyAxis({} - {} rad/sample, {} points, {})",
            self.inner.start(),
            self.inner.stop(),
            self.npoints(),
            self.sweep_type()
        )
    }

    fn __len__(&self) -> usize {
        self.npoints()
    }
}

impl PyFrequencyAxis {
    /// Get the inner axis reference
    pub fn inner(&self) -> &FrequencyAxis {
        &self.inner
    }
}

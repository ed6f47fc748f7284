//! Python bindings for the all-pass filter

use allpass_core::{AllpassAnalysis, AllpassError, AllpassFilter, DesignOptions, DesignState};
use num_complex::Complex64;
use numpy::{PyArray1, PyReadonlyArray1, ToPyArray};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::frequency::PyFrequencyAxis;

fn to_py_error(e: AllpassError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Python wrapper for AllpassFilter
#[pyclass(name = "AllpassFilter")]
#[derive(Clone)]
pub struct PyAllpassFilter {
    inner: AllpassFilter,
}

#[pymethods]
impl PyAllpassFilter {
    /// Create an all-pass filter from its poles
    ///
    /// Args:
    ///     poles: Complex numpy array of pole positions, each |p| < 1
    ///     enforce_real_output: Add conjugate companions for a real impulse response
    ///     sample_rate: Sample rate in Hz, used for unit conversion only
    #[new]
    #[pyo3(signature = (poles, enforce_real_output=true, sample_rate=48000.0))]
    pub fn new(
        poles: PyReadonlyArray1<'_, Complex64>,
        enforce_real_output: bool,
        sample_rate: f64,
    ) -> PyResult<Self> {
        let positions = poles.as_array().to_vec();
        let options = DesignOptions {
            enforce_real_output,
            sample_rate,
        };
        let inner = AllpassFilter::from_positions(&positions, options).map_err(to_py_error)?;
        Ok(Self { inner })
    }

    /// Rebuild a filter from saved design state JSON
    #[staticmethod]
    pub fn from_state_json(json: &str) -> PyResult<Self> {
        let state = DesignState::from_json(json).map_err(to_py_error)?;
        let inner = state.filter().map_err(to_py_error)?;
        Ok(Self { inner })
    }

    /// Filter order (effective pole count)
    #[getter]
    pub fn order(&self) -> usize {
        self.inner.order()
    }

    /// Effective poles, user poles first
    #[getter]
    pub fn poles<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<Complex64>> {
        self.inner.positions().to_pyarray(py)
    }

    /// Feedback (denominator) coefficients
    #[getter]
    pub fn feedback<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<Complex64>> {
        self.inner.feedback().to_pyarray(py)
    }

    /// Feedforward (numerator) coefficients
    #[getter]
    pub fn feedforward<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<Complex64>> {
        self.inner.feedforward().to_pyarray(py)
    }

    /// Coefficient download text
    pub fn export_text(&self) -> String {
        self.inner.coefficients().export_text()
    }

    /// Complex response over `axis`
    pub fn frequency_response<'py>(
        &self,
        py: Python<'py>,
        axis: &PyFrequencyAxis,
    ) -> PyResult<Bound<'py, PyArray1<Complex64>>> {
        let h = self
            .inner
            .frequency_response(axis.inner())
            .map_err(to_py_error)?;
        Ok(h.to_pyarray(py))
    }

    /// Run the phase analysis over `axis`
    pub fn analyze(&self, axis: &PyFrequencyAxis) -> PyResult<PyAllpassAnalysis> {
        let inner = self.inner.analyze(axis.inner()).map_err(to_py_error)?;
        Ok(PyAllpassAnalysis { inner })
    }

    fn __repr__(&self) -> String {
        format!(
            "AllpassFilter(order={}, enforce_real_output={})",
            self.inner.order(),
            self.inner.options().enforce_real_output
        )
    }

    fn __str__(&self) -> String {
        self.inner.coefficients().to_string()
    }
}

/// Python wrapper for AllpassAnalysis
#[pyclass(name = "AllpassAnalysis")]
pub struct PyAllpassAnalysis {
    inner: AllpassAnalysis,
}

#[pymethods]
impl PyAllpassAnalysis {
    #[getter]
    pub fn w<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.w.to_pyarray(py)
    }

    #[getter]
    pub fn magnitude<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.magnitude.to_pyarray(py)
    }

    #[getter]
    pub fn phase<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.phase.to_pyarray(py)
    }

    #[getter]
    pub fn unwrapped_phase<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.unwrapped_phase.to_pyarray(py)
    }

    /// Phase delay in samples; undefined samples are NaN
    #[getter]
    pub fn phase_delay<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.phase_delay.values.to_pyarray(py)
    }

    /// Indices where the phase delay is undefined
    #[getter]
    pub fn phase_delay_undefined_at(&self) -> Vec<usize> {
        self.inner.phase_delay.undefined_at.clone()
    }

    #[getter]
    pub fn group_delay<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.group_delay.to_pyarray(py)
    }

    /// Check |H(w)| = 1 within `tol` (default 1e-9)
    #[pyo3(signature = (tol=None))]
    pub fn is_allpass(&self, tol: Option<f64>) -> bool {
        self.inner.is_allpass(tol)
    }

    fn __len__(&self) -> usize {
        self.inner.npoints()
    }
}

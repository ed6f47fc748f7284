//! WASM bindings for the frequency axis

use allpass_core::frequency::{FrequencyAxis, FrequencyUnit, SweepType};
use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

/// Sampled angular frequency axis for WASM
#[wasm_bindgen]
pub struct WasmFrequencyAxis {
    inner: FrequencyAxis,
}

#[wasm_bindgen]
impl WasmFrequencyAxis {
    /// Create an axis over [0, pi]
    ///
    /// @param npoints - Number of frequency samples
    /// @param sweep_type - Sweep type ('linear' or 'log')
    #[wasm_bindgen(constructor)]
    pub fn new(npoints: usize, sweep_type: Option<String>) -> Result<WasmFrequencyAxis, JsValue> {
        let name = sweep_type.unwrap_or_else(|| "linear".to_string());
        let sweep = SweepType::from_str(&name)
            .ok_or_else(|| JsValue::from_str(&format!("Invalid sweep type: {}", name)))?;

        Ok(WasmFrequencyAxis {
            inner: FrequencyAxis::new(npoints, sweep),
        })
    }

    /// Angular frequencies in rad/sample
    #[wasm_bindgen(getter)]
    pub fn w(&self) -> Float64Array {
        Float64Array::from(self.inner.w())
    }

    /// Frequencies in Hz at `sample_rate`
    #[wasm_bindgen(js_name = wHz)]
    pub fn w_hz(&self, sample_rate: f64) -> Float64Array {
        let f = self.inner.w_scaled(FrequencyUnit::Hz, sample_rate);
        Float64Array::from(f.as_slice())
    }

    /// Number of frequency points
    #[wasm_bindgen(getter)]
    pub fn npoints(&self) -> usize {
        self.inner.npoints()
    }
}

impl WasmFrequencyAxis {
    /// Get the inner axis reference
    pub fn inner(&self) -> &FrequencyAxis {
        &self.inner
    }
}

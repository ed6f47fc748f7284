//! WASM bindings for the all-pass filter and its analysis

use allpass_core::filter::PlotOptions;
use allpass_core::{AllpassAnalysis, AllpassFilter, DesignOptions, DesignState};
use js_sys::{Array, Float64Array};
use num_complex::Complex64;
use wasm_bindgen::prelude::*;

use crate::frequency::WasmFrequencyAxis;

fn to_js_error(e: allpass_core::AllpassError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// All-pass filter for WASM
#[wasm_bindgen]
pub struct WasmAllpassFilter {
    inner: AllpassFilter,
}

#[wasm_bindgen]
impl WasmAllpassFilter {
    /// Create a filter from pole positions
    ///
    /// @param re - Real parts of the poles
    /// @param im - Imaginary parts of the poles
    /// @param enforce_real_output - Add conjugate companions (default true)
    /// @param sample_rate - Sample rate in Hz (default 48000)
    #[wasm_bindgen(constructor)]
    pub fn new(
        re: &[f64],
        im: &[f64],
        enforce_real_output: Option<bool>,
        sample_rate: Option<f64>,
    ) -> Result<WasmAllpassFilter, JsValue> {
        if re.len() != im.len() {
            return Err(JsValue::from_str(&format!(
                "Pole arrays differ in length: {} real vs {} imaginary",
                re.len(),
                im.len()
            )));
        }

        let defaults = DesignOptions::default();
        let options = DesignOptions {
            enforce_real_output: enforce_real_output.unwrap_or(defaults.enforce_real_output),
            sample_rate: sample_rate.unwrap_or(defaults.sample_rate),
        };
        let positions: Vec<Complex64> = re
            .iter()
            .zip(im)
            .map(|(&r, &i)| Complex64::new(r, i))
            .collect();

        let inner = AllpassFilter::from_positions(&positions, options).map_err(to_js_error)?;
        Ok(WasmAllpassFilter { inner })
    }

    /// Create a filter from a saved design state
    #[wasm_bindgen(js_name = fromStateJson)]
    pub fn from_state_json(json: &str) -> Result<WasmAllpassFilter, JsValue> {
        let state = DesignState::from_json(json).map_err(to_js_error)?;
        let inner = state.filter().map_err(to_js_error)?;
        Ok(WasmAllpassFilter { inner })
    }

    /// Filter order (effective pole count)
    #[wasm_bindgen(getter)]
    pub fn order(&self) -> usize {
        self.inner.order()
    }

    /// Real parts of the feedback coefficients
    #[wasm_bindgen(js_name = feedbackRe)]
    pub fn feedback_re(&self) -> Float64Array {
        let v: Vec<f64> = self.inner.feedback().iter().map(|c| c.re).collect();
        Float64Array::from(v.as_slice())
    }

    /// Imaginary parts of the feedback coefficients
    #[wasm_bindgen(js_name = feedbackIm)]
    pub fn feedback_im(&self) -> Float64Array {
        let v: Vec<f64> = self.inner.feedback().iter().map(|c| c.im).collect();
        Float64Array::from(v.as_slice())
    }

    /// Real parts of the feedforward coefficients
    #[wasm_bindgen(js_name = feedforwardRe)]
    pub fn feedforward_re(&self) -> Float64Array {
        let v: Vec<f64> = self.inner.feedforward().iter().map(|c| c.re).collect();
        Float64Array::from(v.as_slice())
    }

    /// Imaginary parts of the feedforward coefficients
    #[wasm_bindgen(js_name = feedforwardIm)]
    pub fn feedforward_im(&self) -> Float64Array {
        let v: Vec<f64> = self.inner.feedforward().iter().map(|c| c.im).collect();
        Float64Array::from(v.as_slice())
    }

    /// Coefficient download text
    #[wasm_bindgen(js_name = exportText)]
    pub fn export_text(&self) -> String {
        self.inner.coefficients().export_text()
    }

    /// Tap / feedforward / feedback table
    #[wasm_bindgen(js_name = coefficientTable)]
    pub fn coefficient_table(&self) -> String {
        self.inner.coefficients().to_string()
    }

    /// Run the phase analysis over `axis`
    pub fn analyze(&self, axis: &WasmFrequencyAxis) -> Result<WasmAllpassAnalysis, JsValue> {
        let inner = self.inner.analyze(axis.inner()).map_err(to_js_error)?;
        Ok(WasmAllpassAnalysis { inner })
    }
}

/// Phase analysis results for WASM
#[wasm_bindgen]
pub struct WasmAllpassAnalysis {
    inner: AllpassAnalysis,
}

#[wasm_bindgen]
impl WasmAllpassAnalysis {
    #[wasm_bindgen(getter)]
    pub fn w(&self) -> Float64Array {
        Float64Array::from(self.inner.w.to_vec().as_slice())
    }

    /// |H(w)|, nominally 1
    #[wasm_bindgen(getter)]
    pub fn magnitude(&self) -> Float64Array {
        Float64Array::from(self.inner.magnitude.to_vec().as_slice())
    }

    /// Principal phase in radians
    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> Float64Array {
        Float64Array::from(self.inner.phase.to_vec().as_slice())
    }

    /// Unwrapped phase in radians
    #[wasm_bindgen(getter, js_name = unwrappedPhase)]
    pub fn unwrapped_phase(&self) -> Float64Array {
        Float64Array::from(self.inner.unwrapped_phase.to_vec().as_slice())
    }

    /// Phase delay in samples; undefined samples are NaN
    #[wasm_bindgen(getter, js_name = phaseDelay)]
    pub fn phase_delay(&self) -> Float64Array {
        Float64Array::from(self.inner.phase_delay.values.to_vec().as_slice())
    }

    /// Group delay in samples
    #[wasm_bindgen(getter, js_name = groupDelay)]
    pub fn group_delay(&self) -> Float64Array {
        Float64Array::from(self.inner.group_delay.to_vec().as_slice())
    }

    /// Plot series for JSON plot options, as `[x, y]`
    #[wasm_bindgen(js_name = plotSeries)]
    pub fn plot_series(&self, options_json: &str) -> Result<Array, JsValue> {
        let options: PlotOptions = serde_json::from_str(options_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid plot options: {}", e)))?;
        let series = self.inner.plot_series(&options);

        let out = Array::new();
        out.push(&Float64Array::from(series.x.as_slice()));
        out.push(&Float64Array::from(series.y.as_slice()));
        Ok(out)
    }
}

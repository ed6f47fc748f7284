//! WASM bindings for allpass-core
//!
//! This module exposes the all-pass designer kernel to JavaScript/WASM.

use wasm_bindgen::prelude::*;

mod filter;
mod frequency;

pub use filter::{WasmAllpassAnalysis, WasmAllpassFilter};
pub use frequency::WasmFrequencyAxis;

/// Get the library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

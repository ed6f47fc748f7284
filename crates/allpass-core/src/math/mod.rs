//! Mathematical functions module
//!
//! Polynomial expansion of pole sets, phase extraction and unwrapping, and
//! unit conversions.

pub mod checks;
pub mod conversions;
pub mod phase;
pub mod polynomial;

pub use conversions::*;
pub use phase::*;
pub use polynomial::*;

//! Coefficient export module
//!
//! Plain-text formatting of the synthesized coefficients. Formatting is
//! pure: writers target any `std::io::Write`, and nothing here touches the
//! file system on its own.

pub mod writer;

pub use writer::CoefficientTable;

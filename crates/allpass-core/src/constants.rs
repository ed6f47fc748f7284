//! Numerical constants for all-pass design
//!
//! Provides standardized tolerance values and defaults used throughout the
//! library.

/// Tolerance for detecting near-zero values in division and singularity checks.
pub const NEAR_ZERO: f64 = 1e-15;

/// Tolerance for the unit-magnitude check of an all-pass response.
pub const ALLPASS_MAGNITUDE_TOL: f64 = 1e-9;

/// Tolerance for detecting DC (zero angular frequency).
/// Used by the phase delay DC policy.
pub const DC_FREQ_TOL: f64 = 1e-12;

/// Unwrapped phase magnitude below which the DC phase is treated as zero,
/// making the phase delay limit finite.
pub const PHASE_ZERO_TOL: f64 = 1e-9;

/// Magnitude a pole is rescaled to when clamped back inside the unit disc.
pub const POLE_CLAMP_MAGNITUDE: f64 = 0.9999;

/// Default number of frequency samples on the analysis axis.
pub const DEFAULT_RESOLUTION: usize = 512;

/// Default sample rate in Hz for unit conversion.
pub const DEFAULT_SAMPLE_RATE: f64 = 48_000.0;

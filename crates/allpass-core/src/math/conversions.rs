//! Unit conversion functions
//!
//! Conversions between the raw kernel units (radians, rad/sample, samples)
//! and the display units offered on the analysis axes.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Convert complex number to magnitude
pub fn complex_2_magnitude(z: Complex64) -> f64 {
    z.norm()
}

/// Convert (magnitude, degree) to complex
pub fn magdeg_2_reim(mag: f64, deg: f64) -> Complex64 {
    Complex64::from_polar(mag, degree_2_radian(deg))
}

/// Convert radians to degrees
pub fn radian_2_degree(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Convert degrees to radians
pub fn degree_2_radian(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert angular frequency (rad/sample) to Hz
pub fn rad_per_sample_2_hz(w: f64, sample_rate: f64) -> f64 {
    w * sample_rate / (2.0 * PI)
}

/// Convert Hz to angular frequency (rad/sample)
pub fn hz_2_rad_per_sample(f: f64, sample_rate: f64) -> f64 {
    2.0 * PI * f / sample_rate
}

/// Convert a delay in samples to seconds
pub fn samples_2_seconds(samples: f64, sample_rate: f64) -> f64 {
    samples / sample_rate
}

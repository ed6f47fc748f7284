//! Coefficient table writer
//!
//! Formats feedforward/feedback taps for on-screen tables and for the
//! plain-text download format.

use ndarray::Array1;
use num_complex::Complex64;
use std::fmt;
use std::io::{Cursor, Write};

use crate::error::Result;

/// Feedforward and feedback taps of one design
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    /// Numerator taps b[0..N]
    pub feedforward: Array1<Complex64>,
    /// Denominator taps a[0..N]
    pub feedback: Array1<Complex64>,
    /// Only the real part is meaningful when true
    pub real_output: bool,
}

impl fmt::Display for CoefficientTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        let mut writer = Cursor::new(&mut buf);
        if self.write_to(&mut writer).is_err() {
            return Err(fmt::Error);
        }
        write!(f, "{}", String::from_utf8_lossy(&buf))
    }
}

impl CoefficientTable {
    pub fn new(feedforward: Array1<Complex64>, feedback: Array1<Complex64>, real_output: bool) -> Self {
        Self {
            feedforward,
            feedback,
            real_output,
        }
    }

    /// Number of taps (filter order + 1)
    #[inline]
    pub fn ntaps(&self) -> usize {
        self.feedback.len()
    }

    /// `(tap, feedforward, feedback)` for each delay tap
    pub fn rows(&self) -> impl Iterator<Item = (usize, Complex64, Complex64)> + '_ {
        self.feedforward
            .iter()
            .zip(self.feedback.iter())
            .enumerate()
            .map(|(t, (&b, &a))| (t, b, a))
    }

    /// Short on-screen form of one coefficient
    ///
    /// Real output shows the real part to 6 decimals; otherwise both parts
    /// are shown to 3 decimals as `re + im i`, keeping the sign on `im`
    /// (`0.000 + -0.500i`).
    pub fn format_display(&self, c: Complex64) -> String {
        if self.real_output {
            format!("{:.6}", c.re)
        } else {
            format!("{:.3} + {:.3}i", c.re, c.im)
        }
    }

    /// Full-precision form of one coefficient for export
    ///
    /// The imaginary part is omitted when it is exactly zero.
    pub fn format_export(&self, c: Complex64) -> String {
        // adding 0.0 turns -0.0 into 0.0
        let re = c.re + 0.0;
        if self.real_output || c.im == 0.0 {
            return format!("{}", re);
        }
        let sign = if c.im < 0.0 { '-' } else { '+' };
        format!("{} {} {}i", re, sign, c.im.abs())
    }

    /// Two-line download text
    ///
    /// ```text
    /// feedforward coefficients: b0, b1, ...
    /// feedback coefficients: a0, a1, ...
    /// ```
    pub fn export_text(&self) -> String {
        let join = |coeffs: &Array1<Complex64>| {
            coeffs
                .iter()
                .map(|&c| self.format_export(c))
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "feedforward coefficients: {}\nfeedback coefficients: {}",
            join(&self.feedforward),
            join(&self.feedback)
        )
    }

    /// Write a tap / feedforward / feedback table
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{:>5} {:>24} {:>24}", "tap", "feedforward", "feedback")?;
        for (t, b, a) in self.rows() {
            writeln!(
                writer,
                "{:>5} {:>24} {:>24}",
                t,
                self.format_display(b),
                self.format_display(a)
            )?;
        }
        Ok(())
    }
}

//! Error types for the all-pass kernel

use thiserror::Error;

use crate::poles::PoleId;

/// Errors raised at the boundary of the design and analysis stages
#[derive(Error, Debug)]
pub enum AllpassError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {what} at index {index}: value is not a finite complex number")]
    Validation { what: &'static str, index: usize },

    #[error("Pole {index} lies outside the unit disc (|p| = {magnitude})")]
    PoleOutsideUnitDisc { index: usize, magnitude: f64 },

    #[error("Duplicate pole id {id}")]
    DuplicatePoleId { id: PoleId },

    #[error("Invalid sample rate {sample_rate}: must be finite and positive")]
    InvalidSampleRate { sample_rate: f64 },

    #[error("Length mismatch: {phase} phase samples vs {frequency} frequency samples")]
    LengthMismatch { phase: usize, frequency: usize },

    #[error("Insufficient samples: need at least {needed}, got {got}")]
    InsufficientSamples { needed: usize, got: usize },

    #[error("Design state error: {0}")]
    State(#[from] serde_json::Error),
}

/// Result alias for fallible kernel operations
pub type Result<T> = std::result::Result<T, AllpassError>;

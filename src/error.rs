//! Error types for the spectral demo

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpectralError>;

/// Errors that can occur while synthesizing, transforming or emitting
#[derive(Debug, Error)]
pub enum SpectralError {
    /// Buffer handed to a transform plan has the wrong length
    #[error("transform plan expects {expected} points, buffer has {actual}")]
    PlanLength { expected: usize, actual: usize },

    /// A zero-length transform was requested
    #[error("cannot plan a transform of length 0")]
    EmptyTransform,

    /// Tone parameters cannot produce a finite signal
    #[error("invalid tone {index}: {reason}")]
    InvalidTone { index: usize, reason: String },

    /// Writing the magnitude stream failed
    #[error("failed to emit magnitudes: {0}")]
    Io(#[from] std::io::Error),
}

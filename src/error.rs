//! Error types for HIC computation.
//!
//! Every failure is classified by [`ErrorKind`] so callers can tell malformed
//! input apart from a signal that is sampled too coarsely for the requested
//! window.

use thiserror::Error;

/// Main error type for HIC computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HicError {
    /// Input validation errors.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Signal has too few samples for integration.
    #[error("Signal too short: need at least {min} samples, got {actual}")]
    TooFewSamples { min: usize, actual: usize },

    /// Time and acceleration arrays have mismatched lengths.
    #[error("Length mismatch: {time} time samples vs {acceleration} acceleration samples")]
    LengthMismatch { time: usize, acceleration: usize },

    /// Time samples are not strictly increasing.
    #[error("Time must be strictly increasing at index {index}")]
    NonMonotonicTime { index: usize },

    /// A sample is NaN or infinite.
    #[error("Non-finite sample at index {index}")]
    NonFinite { index: usize },

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Largest sample gap is too wide to resolve the shortest window.
    #[error("Sampling too coarse: max gap {max_gap} s exceeds limit {limit} s")]
    CoarseSampling { max_gap: f64, limit: f64 },
}

/// Coarse classification of a [`HicError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed samples or parameters. The caller must fix the input.
    Validation,
    /// Well-formed input sampled too coarsely for `tmin`.
    CoarseSampling,
}

/// Result type alias for HIC operations.
pub type Result<T> = std::result::Result<T, HicError>;

impl HicError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a too-few-samples error.
    #[must_use]
    pub const fn too_few_samples(min: usize, actual: usize) -> Self {
        Self::TooFewSamples { min, actual }
    }

    /// Create a length mismatch error.
    #[must_use]
    pub const fn length_mismatch(time: usize, acceleration: usize) -> Self {
        Self::LengthMismatch { time, acceleration }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a coarse sampling error.
    #[must_use]
    pub const fn coarse_sampling(max_gap: f64, limit: f64) -> Self {
        Self::CoarseSampling { max_gap, limit }
    }

    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CoarseSampling { .. } => ErrorKind::CoarseSampling,
            _ => ErrorKind::Validation,
        }
    }

    /// Whether this error reports malformed input or parameters.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation)
    }
}

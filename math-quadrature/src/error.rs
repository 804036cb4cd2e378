//! Error types for the quadrature routines.

use thiserror::Error;

/// Errors reported by the integration routines.
///
/// Every condition is detected up front, before any computation that would
/// silently produce NaN or infinite estimates.
#[derive(Debug, Error)]
pub enum QuadratureError {
    /// The integration interval is empty or reversed.
    #[error("invalid interval: left bound ({a}) must be below right bound ({b})")]
    InvalidInterval {
        /// Left bound as supplied
        a: f64,
        /// Right bound as supplied
        b: f64,
    },

    /// The error tolerance is zero, negative, or NaN.
    #[error("invalid tolerance: {eps} (must be > 0)")]
    InvalidTolerance {
        /// The rejected tolerance
        eps: f64,
    },

    /// A sampling plan with zero samples or zero trials.
    #[error("invalid sampling plan: {samples} samples per trial, {trials} trials (both must be >= 1)")]
    InvalidSampling {
        /// Samples requested per trial
        samples: usize,
        /// Number of trials requested
        trials: usize,
    },
}

/// A specialized `Result` type for quadrature operations.
pub type Result<T> = std::result::Result<T, QuadratureError>;

impl QuadratureError {
    /// Returns `true` if the error concerns the integration interval.
    pub fn is_interval_error(&self) -> bool {
        matches!(self, QuadratureError::InvalidInterval { .. })
    }
}

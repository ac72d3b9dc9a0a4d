//! Harness error types
//!
//! Evaluation errors wrap the estimator and encoding errors they surface
//! from, and add the harness's own parameter and sample-count failures.
//! Nothing is retried: a failing fold fails its whole protocol run.

use encoding_spi::EncodingError;
use regressor_spi::ModelError;
use thiserror::Error;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Errors that can occur while running an evaluation protocol
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HarnessError {
    /// Estimator failure during a fold or repetition
    #[error("Estimator error: {0}")]
    Model(#[from] ModelError),

    /// Encoding failure while preparing a comparison strategy
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Invalid protocol parameter
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Too few samples for the requested split
    #[error("Insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}

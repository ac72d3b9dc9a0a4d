//! Regressor error types
//!
//! Defines the standardized error type for all estimator operations.

use thiserror::Error;

/// Result type alias for regressor operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while fitting or predicting with an estimator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Insufficient samples for the operation
    #[error("Insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Invalid feature matrix or target vector
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

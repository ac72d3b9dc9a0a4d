//! Encoding error types
//!
//! Defines the standardized error type for all sequence-encoding operations.

use thiserror::Error;

/// Result type alias for encoding operations
pub type Result<T> = std::result::Result<T, EncodingError>;

/// Errors that can occur while encoding sequences into feature matrices
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodingError {
    /// A residue outside the configured alphabet
    #[error("Unknown residue '{residue}' at position {position}")]
    UnknownResidue { residue: char, position: usize },

    /// Sequences of unequal length where equal length is required
    #[error("Length mismatch: expected sequences of length {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// No sequences to encode
    #[error("Nothing to encode: input is empty")]
    EmptyInput,

    /// Scaler used before fitting
    #[error("Scaler must be fitted before transforming")]
    NotFitted,

    /// Column count differs from the fitted shape
    #[error("Dimension mismatch: fitted {expected} columns, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_residue_message() {
        let error = EncodingError::UnknownResidue {
            residue: 'X',
            position: 4,
        };
        assert_eq!(error.to_string(), "Unknown residue 'X' at position 4");
    }

    #[test]
    fn test_length_mismatch_message() {
        let error = EncodingError::LengthMismatch {
            expected: 12,
            actual: 9,
        };
        assert_eq!(
            error.to_string(),
            "Length mismatch: expected sequences of length 12, got 9"
        );
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let error = EncodingError::DimensionMismatch {
            expected: 5,
            actual: 3,
        };
        assert!(error.to_string().contains("fitted 5 columns"));
    }

    #[test]
    fn test_error_implements_std_error() {
        fn assert_std_error<E: std::error::Error>() {}
        assert_std_error::<EncodingError>();
    }
}

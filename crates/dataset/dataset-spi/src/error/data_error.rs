//! Data error types.

use thiserror::Error;

/// Result type alias for data operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading or writing trait tables
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// File could not be read or written
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed CSV content
    #[error("Parse error: {0}")]
    Parse(String),

    /// A mandatory column is absent from the header
    #[error("Missing column '{0}'")]
    MissingColumn(String),

    /// The source produced no records
    #[error("No data returned")]
    NoData,
}

impl From<std::io::Error> for DataError {
    fn from(error: std::io::Error) -> Self {
        DataError::Io(error.to_string())
    }
}

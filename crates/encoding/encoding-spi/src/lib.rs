//! Encoding Service Provider Interface
//!
//! Defines the contracts for turning aligned biological sequences into
//! numeric feature matrices:
//! - Sequence transformation strategies
//! - Aligned record model
//! - Standardized error types

pub mod contract;
pub mod error;
pub mod model;

pub use contract::SequenceTransformer;
pub use error::EncodingError;
pub use model::AlignedData;

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodingError>;

//! Dataset Service Provider Interface
//!
//! Defines the contracts for loading sequence-trait records:
//! - Data source contract
//! - Trait record and table models
//! - Standardized error types

pub mod contract;
pub mod error;
pub mod model;

pub use contract::DataSource;
pub use error::DataError;
pub use model::{TraitRecord, TraitTable};

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

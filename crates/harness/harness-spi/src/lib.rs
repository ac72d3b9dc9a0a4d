//! Harness Service Provider Interface
//!
//! Defines the contracts and result models of the evaluation harness:
//! - Estimator construction seam for configuration trials
//! - Parameter grids and their cross-product enumeration
//! - Search, holdout, and comparison result models
//! - Standardized error types

pub mod contract;
pub mod error;
pub mod model;

pub use contract::EstimatorFactory;
pub use error::HarnessError;
pub use model::{ComparisonRow, GridSearchReport, HoldoutTrace, ParamGrid, ParamSet, SearchRecord};

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

//! Regressor Service Provider Interface
//!
//! Defines the capability contract shared by all regression estimators:
//! - Fit/predict over a feature matrix and target vector
//! - Parameter tuning for grid-search compatibility
//! - Standardized error types

pub mod contract;
pub mod error;
pub mod model;

pub use contract::{Regressor, TunableRegressor};
pub use error::ModelError;
pub use model::{EstimatorKind, ParamValue};

/// Result type for regressor operations.
pub type Result<T> = std::result::Result<T, ModelError>;

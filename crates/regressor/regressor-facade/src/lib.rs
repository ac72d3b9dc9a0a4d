//! Regressor Facade
//!
//! High-level API for the regressor stack. Re-exports all public types
//! for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use regressor_facade::prelude::*;
//!
//! let mut model = RandomForestRegressor::new().with_seed(42);
//! model.fit(&x, &y)?;
//! let predictions = model.predict(&x_test)?;
//! ```

// Re-export everything from core (which includes API and SPI)
pub use regressor_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use regressor_spi::{Regressor, TunableRegressor};

    // Core types
    pub use regressor_api::RecurrentConfig;

    // Error types
    pub use regressor_spi::{EstimatorKind, ModelError, ParamValue, Result};

    // Implementations
    pub use regressor_core::{
        build_estimator, DecisionTreeRegressor, ExtraTreesRegressor, GradientBoostingRegressor,
        Kernel, KernelSvr, LinearRegression, RandomForestRegressor, RecurrentRegressor,
    };
}

//! Harness Facade
//!
//! High-level API for the evaluation harness. Re-exports all public types
//! from the harness stack for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use harness_facade::prelude::*;
//!
//! let search = GridSearch::new(GridSearchConfig::default().cv(10));
//! let report = search.run(&factory, &x, &y, &grid)?;
//! println!("best RMSE: {:?}", report.best().map(|r| r.rmse));
//! ```

// Re-export everything from core (which includes API and SPI)
pub use harness_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use harness_spi::EstimatorFactory;

    // Core types
    pub use harness_api::{ComparisonConfig, GridSearchConfig, HoldoutConfig};

    // Error types
    pub use harness_spi::{
        ComparisonRow, GridSearchReport, HarnessError, HoldoutTrace, ParamGrid, ParamSet, Result,
        SearchRecord,
    };

    // Implementations
    pub use harness_core::{
        print_comparison, print_score, print_search_report, render_comparison, render_score,
        render_search_report, Comparison, GridSearch, HoldoutEvaluation,
    };
}

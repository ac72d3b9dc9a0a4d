//! Dataset Facade
//!
//! High-level API for trait-data loading. Re-exports all public types
//! from the dataset stack for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use dataset_facade::prelude::*;
//!
//! let table = CsvTraitSource::new("measurements.csv").load()?;
//! write_snapshot(&table, "geraniol.csv", "seq", "geraniol")?;
//! ```

// Re-export everything from core (which includes API and SPI)
pub use dataset_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use dataset_spi::DataSource;

    // Core types
    pub use dataset_api::DataConfig;

    // Error types
    pub use dataset_spi::{DataError, Result, TraitRecord, TraitTable};

    // Implementations
    pub use dataset_core::{write_snapshot, CsvTraitSource};
}

//! Dataset Core
//!
//! CSV-backed trait-data loading and snapshot writing.

mod csv_source;
mod snapshot;

pub use csv_source::CsvTraitSource;
pub use snapshot::write_snapshot;

// Re-export API types (which include SPI types)
pub use dataset_api::{DataConfig, DataError, DataSource, Result, TraitRecord, TraitTable};

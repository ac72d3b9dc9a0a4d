//! Dataset Consumer API
//!
//! Configuration types for trait-data sources.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use dataset_spi::{DataError, DataSource, Result, TraitRecord, TraitTable};

/// Column mapping and fill policy for a trait-data source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Header name of the sequence column
    pub seq_column: String,
    /// Header name of the trait column
    pub target_column: String,
    /// Optional header name of a numeric id column; row index when absent
    pub id_column: Option<String>,
    /// Value substituted for missing or unparsable trait cells
    pub fill_missing: f64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seq_column: "seq".to_string(),
            target_column: "geraniol".to_string(),
            id_column: None,
            fill_missing: 0.0,
        }
    }
}

impl DataConfig {
    /// Set the sequence column name.
    pub fn seq_column(mut self, name: impl Into<String>) -> Self {
        self.seq_column = name.into();
        self
    }

    /// Set the trait column name.
    pub fn target_column(mut self, name: impl Into<String>) -> Self {
        self.target_column = name.into();
        self
    }

    /// Use an explicit id column instead of the row index.
    pub fn id_column(mut self, name: impl Into<String>) -> Self {
        self.id_column = Some(name.into());
        self
    }

    /// Set the fill value for missing trait cells.
    pub fn fill_missing(mut self, value: f64) -> Self {
        self.fill_missing = value;
        self
    }
}

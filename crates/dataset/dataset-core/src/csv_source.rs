//! CSV trait-data source.

use dataset_api::DataConfig;
use dataset_spi::{DataError, DataSource, Result, TraitRecord, TraitTable};
use std::path::PathBuf;

/// Loads sequence-trait records from a headered CSV file
///
/// Columns are resolved by name through [`DataConfig`]. Missing or
/// unparsable trait cells take the configured fill value; an absent
/// mandatory column fails the whole load.
#[derive(Debug, Clone)]
pub struct CsvTraitSource {
    path: PathBuf,
    config: DataConfig,
}

impl CsvTraitSource {
    /// Source with default column names.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: DataConfig::default(),
        }
    }

    /// Source with an explicit column mapping.
    pub fn with_config(path: impl Into<PathBuf>, config: DataConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    }
}

impl DataSource for CsvTraitSource {
    fn load(&self) -> Result<TraitTable> {
        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|e| DataError::Io(e.to_string()))?;
        let headers = reader
            .headers()
            .map_err(|e| DataError::Parse(e.to_string()))?
            .clone();

        let seq_idx = Self::column_index(&headers, &self.config.seq_column)?;
        let target_idx = Self::column_index(&headers, &self.config.target_column)?;
        let id_idx = match &self.config.id_column {
            Some(name) => Some(Self::column_index(&headers, name)?),
            None => None,
        };

        let mut records = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let record = result.map_err(|e| DataError::Parse(e.to_string()))?;
            let sequence = record
                .get(seq_idx)
                .ok_or_else(|| DataError::Parse(format!("row {} has no sequence cell", row)))?
                .trim()
                .to_string();
            let target = record
                .get(target_idx)
                .and_then(|cell| cell.trim().parse::<f64>().ok())
                .unwrap_or(self.config.fill_missing);
            let id = match id_idx {
                Some(idx) => record
                    .get(idx)
                    .and_then(|cell| cell.trim().parse::<f64>().ok())
                    .unwrap_or(row as f64),
                None => row as f64,
            };
            records.push(TraitRecord {
                id,
                sequence,
                target,
            });
        }
        if records.is_empty() {
            return Err(DataError::NoData);
        }
        Ok(TraitTable { records })
    }
}

//! CSV snapshot writing.

use dataset_spi::{DataError, Result, TraitTable};
use std::path::Path;

/// Write a loaded table back out as a `seq,geraniol`-style CSV
///
/// The snapshot uses the given column names so a written file loads
/// again through the same configuration.
pub fn write_snapshot(
    table: &TraitTable,
    path: impl AsRef<Path>,
    seq_column: &str,
    target_column: &str,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| DataError::Io(e.to_string()))?;
    writer
        .write_record([seq_column, target_column])
        .map_err(|e| DataError::Io(e.to_string()))?;
    for record in &table.records {
        writer
            .write_record([record.sequence.as_str(), &record.target.to_string()])
            .map_err(|e| DataError::Io(e.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

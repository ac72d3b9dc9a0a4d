//! Sequence-trait records.

use serde::{Deserialize, Serialize};

/// One sequence with its measured trait value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitRecord {
    /// Numeric sample id; the row index when the source has no id column
    pub id: f64,
    /// Raw sequence text, unaligned
    pub sequence: String,
    /// Measured trait value; missing cells become the configured fill
    pub target: f64,
}

/// A loaded batch of sequence-trait records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitTable {
    pub records: Vec<TraitRecord>,
}

impl TraitTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Decompose into `(ids, sequences, targets)` for alignment.
    pub fn into_columns(self) -> (Vec<f64>, Vec<String>, Vec<f64>) {
        let mut ids = Vec::with_capacity(self.records.len());
        let mut sequences = Vec::with_capacity(self.records.len());
        let mut targets = Vec::with_capacity(self.records.len());
        for record in self.records {
            ids.push(record.id);
            sequences.push(record.sequence);
            targets.push(record.target);
        }
        (ids, sequences, targets)
    }
}

//! Aligned sequence records.

use serde::{Deserialize, Serialize};

/// A batch of aligned sequence records ready for feature transformation
///
/// All sequences share the same width; shorter raw sequences are padded
/// with trailing `-` gap characters before construction. The three vectors
/// are index-aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedData {
    /// Numeric sample identifiers, carried through into feature matrices
    pub ids: Vec<f64>,
    /// Equal-width sequences over the residue alphabet plus `-` gaps
    pub sequences: Vec<String>,
    /// Trait values, index-aligned with `sequences`
    pub targets: Vec<f64>,
}

impl AlignedData {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// True when there are no records.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Shared sequence width, or 0 when empty.
    pub fn width(&self) -> usize {
        self.sequences.first().map_or(0, |s| s.chars().count())
    }
}

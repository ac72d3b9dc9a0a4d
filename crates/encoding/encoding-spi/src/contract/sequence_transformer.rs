//! Sequence transformation contract.

use crate::error::Result;
use crate::model::AlignedData;

/// A strategy for turning aligned sequences into a numeric feature matrix
///
/// Every output row follows the same layout: column 0 is the sample id,
/// column 1 the trait value, and columns 2.. the encoded features. Rows
/// are index-aligned with the input records and share a constant width.
pub trait SequenceTransformer {
    /// Human-readable strategy name used in comparison reports.
    fn name(&self) -> &str;

    /// Encode the aligned records into `[id, target, features..]` rows.
    fn transform(&self, data: &AlignedData) -> Result<Vec<Vec<f64>>>;
}

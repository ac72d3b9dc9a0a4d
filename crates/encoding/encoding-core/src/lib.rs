//! Encoding Core
//!
//! Implementations of the sequence encoders, record alignment, and the
//! standard feature scaler.

mod align;
mod amino_acid;
mod one_hot;
mod ordinal;
mod scaler;

pub use align::align_records;
pub use amino_acid::AminoAcidTransformer;
pub use one_hot::OneHotTransformer;
pub use ordinal::{ordinal_seq, ordinal_seq_padded};
pub use scaler::StandardScaler;

// Re-export API types (which include SPI types)
pub use encoding_api::{Alphabet, AlignedData, EncodingError, Result, SequenceTransformer};

/// Split an encoded `[id, target, features..]` matrix into its parts.
///
/// Returns `(ids, targets, features)`; rows narrower than the two leading
/// columns yield empty feature rows rather than panicking.
pub fn split_encoded(matrix: &[Vec<f64>]) -> (Vec<f64>, Vec<f64>, Vec<Vec<f64>>) {
    let mut ids = Vec::with_capacity(matrix.len());
    let mut targets = Vec::with_capacity(matrix.len());
    let mut features = Vec::with_capacity(matrix.len());
    for row in matrix {
        ids.push(row.first().copied().unwrap_or(0.0));
        targets.push(row.get(1).copied().unwrap_or(0.0));
        features.push(row.get(2..).map_or_else(Vec::new, |rest| rest.to_vec()));
    }
    (ids, targets, features)
}

//! Contract traits for sequence transformation.

mod sequence_transformer;

pub use sequence_transformer::SequenceTransformer;

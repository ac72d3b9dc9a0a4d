//! Encoding Facade
//!
//! High-level API for sequence encoding. Re-exports all public types
//! from the encoding stack for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use encoding_facade::prelude::*;
//!
//! let data = align_records(ids, sequences, targets)?;
//! let matrix = OneHotTransformer::new().transform(&data)?;
//! let (ids, targets, features) = split_encoded(&matrix);
//! ```

// Re-export everything from core (which includes API and SPI)
pub use encoding_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use encoding_spi::SequenceTransformer;

    // Core types
    pub use encoding_api::Alphabet;

    // Error types
    pub use encoding_spi::{AlignedData, EncodingError, Result};

    // Implementations
    pub use encoding_core::{
        align_records, ordinal_seq, ordinal_seq_padded, split_encoded, AminoAcidTransformer,
        OneHotTransformer, StandardScaler,
    };
}

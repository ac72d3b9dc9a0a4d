//! Error types for encoding operations.

mod encoding_error;

pub use encoding_error::{EncodingError, Result};

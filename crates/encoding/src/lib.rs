//! # encoding
//!
//! Sequence encoders for trait regression: ordinal, one-hot, and
//! physicochemical descriptor encodings over aligned protein sequences,
//! plus record alignment and a standard feature scaler.

pub use encoding_facade::*;

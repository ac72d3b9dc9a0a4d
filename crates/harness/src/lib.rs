//! # harness
//!
//! The evaluation harness: cross-validated grid search, repeated
//! randomized holdout, and a transformer × estimator comparison matrix,
//! with text report rendering.

pub use harness_facade::*;

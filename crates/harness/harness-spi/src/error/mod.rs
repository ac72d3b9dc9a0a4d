//! Error types for harness operations.

mod harness_error;

pub use harness_error::{HarnessError, Result};

//! Error types for regressor operations.

mod model_error;

pub use model_error::{ModelError, Result};

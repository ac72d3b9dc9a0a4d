//! Contract traits for regression estimators.

mod regressor;

pub use regressor::{Regressor, TunableRegressor};

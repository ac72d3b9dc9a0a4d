//! Regressor Core
//!
//! From-scratch implementations of the estimator variants used by the
//! evaluation harness:
//! - Ordinary least squares linear regression
//! - CART decision tree and bagged/randomized tree ensembles
//! - Gradient boosting over shallow trees
//! - Epsilon-insensitive kernel SVR
//! - Stacked recurrent network with Adam training

mod forest;
mod gradient_boosting;
mod linear;
mod recurrent;
mod svr;
mod tree;
mod zoo;

pub use forest::{ExtraTreesRegressor, RandomForestRegressor};
pub use gradient_boosting::GradientBoostingRegressor;
pub use linear::LinearRegression;
pub use recurrent::RecurrentRegressor;
pub use svr::{Kernel, KernelSvr};
pub use tree::DecisionTreeRegressor;
pub use zoo::build_estimator;

// Re-export from API for convenience
pub use regressor_api::RecurrentConfig;

// Re-export SPI types
pub use regressor_spi::{EstimatorKind, ModelError, ParamValue, Regressor, Result, TunableRegressor};

/// Validate a feature matrix / target pair before fitting.
///
/// Checks index alignment, a minimum sample count, constant row width and
/// finiteness of every value.
pub(crate) fn validate_xy(x: &[Vec<f64>], y: &[f64], required: usize) -> Result<usize> {
    if x.len() != y.len() {
        return Err(ModelError::InvalidData(format!(
            "feature rows ({}) and targets ({}) are not aligned",
            x.len(),
            y.len()
        )));
    }
    if x.len() < required {
        return Err(ModelError::InsufficientData {
            required,
            actual: x.len(),
        });
    }
    let width = x[0].len();
    if width == 0 {
        return Err(ModelError::InvalidData("empty feature rows".to_string()));
    }
    for row in x {
        if row.len() != width {
            return Err(ModelError::InvalidData(format!(
                "ragged feature matrix: expected width {}, got {}",
                width,
                row.len()
            )));
        }
        if row.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::InvalidData(
                "feature matrix contains non-finite values".to_string(),
            ));
        }
    }
    if y.iter().any(|v| !v.is_finite()) {
        return Err(ModelError::InvalidData(
            "targets contain non-finite values".to_string(),
        ));
    }
    Ok(width)
}

/// Validate a prediction matrix against the fitted feature width.
pub(crate) fn validate_predict(x: &[Vec<f64>], width: usize) -> Result<()> {
    for row in x {
        if row.len() != width {
            return Err(ModelError::InvalidData(format!(
                "prediction rows must have width {}, got {}",
                width,
                row.len()
            )));
        }
    }
    Ok(())
}

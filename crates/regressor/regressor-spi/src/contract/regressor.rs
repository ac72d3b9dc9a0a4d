//! Regressor traits for supervised estimators
//!
//! Defines the core trait interfaces that all regression estimators must
//! implement.

use crate::error::Result;
use crate::model::ParamValue;

/// Common trait for all supervised regression estimators
///
/// This trait defines the capability contract the evaluation harness relies
/// on. It follows a fit-predict pattern: a feature matrix is an ordered
/// sequence of fixed-width rows, index-aligned with the target vector.
///
/// # Example
///
/// ```rust,ignore
/// use regressor_spi::Regressor;
///
/// fn score<R: Regressor>(model: &mut R, x: &[Vec<f64>], y: &[f64]) -> regressor_spi::Result<Vec<f64>> {
///     model.fit(x, y)?;
///     model.predict(x)
/// }
/// ```
pub trait Regressor {
    /// Fit the estimator to training data
    ///
    /// # Arguments
    ///
    /// * `x` - Feature matrix, one row per sample
    /// * `y` - Target values, index-aligned with `x`
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()>;

    /// Predict target values for the given feature matrix
    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>>;

    /// Check whether the estimator has been fitted
    fn is_fitted(&self) -> bool;
}

/// Trait for estimators that accept named hyperparameters
///
/// Extends [`Regressor`] with the `set_param` capability the grid search
/// uses to enumerate configurations. Unknown parameter names are an
/// `InvalidParameter` error, never silently ignored.
pub trait TunableRegressor: Regressor {
    /// Set a hyperparameter by name before fitting
    fn set_param(&mut self, name: &str, value: &ParamValue) -> Result<()>;
}

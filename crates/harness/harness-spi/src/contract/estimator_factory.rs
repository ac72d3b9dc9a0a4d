//! Estimator construction seam.

use regressor_spi::TunableRegressor;

/// Builds a fresh, unfitted estimator for each configuration trial
///
/// Grid search constructs one estimator per configuration in the
/// cross-product, so no state leaks between trials. Any closure returning
/// a boxed [`TunableRegressor`] is a factory.
pub trait EstimatorFactory {
    fn build(&self) -> Box<dyn TunableRegressor>;
}

impl<F> EstimatorFactory for F
where
    F: Fn() -> Box<dyn TunableRegressor>,
{
    fn build(&self) -> Box<dyn TunableRegressor> {
        self()
    }
}

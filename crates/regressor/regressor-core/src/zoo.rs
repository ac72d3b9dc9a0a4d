//! Estimator construction by kind

use crate::{
    DecisionTreeRegressor, ExtraTreesRegressor, GradientBoostingRegressor, Kernel, KernelSvr,
    LinearRegression, RandomForestRegressor, RecurrentRegressor,
};
use regressor_spi::{EstimatorKind, TunableRegressor};

/// Build a default-configured estimator for the given kind
///
/// Every estimator comes back unfitted with its library defaults; callers
/// tune it through [`TunableRegressor::set_param`] before fitting.
pub fn build_estimator(kind: EstimatorKind) -> Box<dyn TunableRegressor> {
    match kind {
        EstimatorKind::Linear => Box::new(LinearRegression::new()),
        EstimatorKind::DecisionTree => Box::new(DecisionTreeRegressor::new()),
        EstimatorKind::RandomForest => Box::new(RandomForestRegressor::new()),
        EstimatorKind::ExtraTrees => Box::new(ExtraTreesRegressor::new()),
        EstimatorKind::GradientBoosting => Box::new(GradientBoostingRegressor::new()),
        EstimatorKind::SvrPoly => Box::new(KernelSvr::new(Kernel::Poly)),
        EstimatorKind::Recurrent => Box::new(RecurrentRegressor::default()),
    }
}

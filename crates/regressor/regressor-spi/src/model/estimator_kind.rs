//! Estimator variant names.

use serde::{Deserialize, Serialize};

/// The estimator variants available to the evaluation harness.
///
/// Display strings are the reporting names used in comparison output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimatorKind {
    Linear,
    DecisionTree,
    RandomForest,
    ExtraTrees,
    GradientBoosting,
    /// Kernel SVR with a polynomial kernel
    SvrPoly,
    Recurrent,
}

impl EstimatorKind {
    /// All estimator variants, in comparison-matrix order.
    pub const ALL: [EstimatorKind; 7] = [
        EstimatorKind::Linear,
        EstimatorKind::DecisionTree,
        EstimatorKind::RandomForest,
        EstimatorKind::ExtraTrees,
        EstimatorKind::GradientBoosting,
        EstimatorKind::SvrPoly,
        EstimatorKind::Recurrent,
    ];
}

impl std::fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EstimatorKind::Linear => "LinearRegression",
            EstimatorKind::DecisionTree => "DecisionTreeRegressor",
            EstimatorKind::RandomForest => "RandomForestRegressor",
            EstimatorKind::ExtraTrees => "ExtraTreesRegressor",
            EstimatorKind::GradientBoosting => "GradientBoostingRegressor",
            EstimatorKind::SvrPoly => "SVR",
            EstimatorKind::Recurrent => "RecurrentRegressor",
        };
        write!(f, "{}", name)
    }
}

//! Comparison matrix rows.

use serde::{Deserialize, Serialize};

/// One (strategy, estimator) cell of the comparison matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Transformation strategy name
    pub strategy: String,
    /// Estimator reporting name
    pub estimator: String,
    /// Mean RMSE across folds
    pub mean_rmse: f64,
    /// Standard deviation of fold RMSE values
    pub std_rmse: f64,
}

impl std::fmt::Display for ComparisonRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t({:.4}, {:.4})",
            self.strategy, self.estimator, self.mean_rmse, self.std_rmse
        )
    }
}

//! Gradient boosting over shallow regression trees
//!
//! Least-squares boosting: each stage fits a depth-bounded CART tree to the
//! current residuals and contributes a learning-rate-scaled correction.

use crate::tree::{SplitterKind, Tree, TreeParams};
use crate::{validate_predict, validate_xy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regressor_spi::{ModelError, ParamValue, Regressor, Result, TunableRegressor};

/// Gradient boosting regressor with sklearn-era defaults
/// (100 stages, learning rate 0.1, depth-3 trees)
#[derive(Debug, Clone)]
pub struct GradientBoostingRegressor {
    n_estimators: usize,
    learning_rate: f64,
    tree_params: TreeParams,
    baseline: f64,
    stages: Vec<Tree>,
    n_features: usize,
}

impl Default for GradientBoostingRegressor {
    fn default() -> Self {
        Self::new()
    }
}

impl GradientBoostingRegressor {
    /// Create an unfitted boosting regressor
    pub fn new() -> Self {
        Self {
            n_estimators: 100,
            learning_rate: 0.1,
            tree_params: TreeParams {
                max_depth: Some(3),
                splitter: SplitterKind::Best,
                ..TreeParams::default()
            },
            baseline: 0.0,
            stages: Vec::new(),
            n_features: 0,
        }
    }

    /// Set the number of boosting stages
    pub fn with_n_estimators(mut self, n: usize) -> Self {
        self.n_estimators = n.max(1);
        self
    }

    /// Set the shrinkage applied to each stage
    pub fn with_learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate.clamp(1e-6, 1.0);
        self
    }
}

impl Regressor for GradientBoostingRegressor {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        let width = validate_xy(x, y, 2)?;
        let n = x.len();
        let idx: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::from_entropy();

        self.baseline = y.iter().sum::<f64>() / n as f64;
        let mut residual: Vec<f64> = y.iter().map(|t| t - self.baseline).collect();

        let mut stages = Vec::with_capacity(self.n_estimators);
        for _ in 0..self.n_estimators {
            let tree = Tree::grow(x, &residual, &idx, &self.tree_params, &mut rng);
            for (i, row) in x.iter().enumerate() {
                residual[i] -= self.learning_rate * tree.predict_row(row);
            }
            stages.push(tree);
        }

        self.stages = stages;
        self.n_features = width;
        Ok(())
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        if self.stages.is_empty() {
            return Err(ModelError::NotFitted);
        }
        validate_predict(x, self.n_features)?;
        Ok(x.iter()
            .map(|row| {
                self.baseline
                    + self.learning_rate
                        * self.stages.iter().map(|t| t.predict_row(row)).sum::<f64>()
            })
            .collect())
    }

    fn is_fitted(&self) -> bool {
        !self.stages.is_empty()
    }
}

impl TunableRegressor for GradientBoostingRegressor {
    fn set_param(&mut self, name: &str, value: &ParamValue) -> Result<()> {
        let invalid = |reason: &str| ModelError::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        };
        match name {
            "n_estimators" => {
                let n = value.as_usize().ok_or_else(|| invalid("expected a positive integer"))?;
                if n == 0 {
                    return Err(invalid("must be positive"));
                }
                self.n_estimators = n;
                Ok(())
            }
            "learning_rate" => {
                let rate = value.as_f64().ok_or_else(|| invalid("expected a numeric value"))?;
                if rate <= 0.0 || rate > 1.0 {
                    return Err(invalid("must be in (0, 1]"));
                }
                self.learning_rate = rate;
                Ok(())
            }
            "max_depth" => {
                self.tree_params.max_depth = if value.is_none() {
                    None
                } else {
                    Some(value.as_usize().ok_or_else(|| invalid("expected None or an integer"))?)
                };
                Ok(())
            }
            _ => Err(invalid("unknown parameter")),
        }
    }
}

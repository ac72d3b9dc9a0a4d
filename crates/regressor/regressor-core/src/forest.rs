//! Tree ensembles
//!
//! Bootstrap-aggregated forests and extra-trees. Both average the
//! predictions of independently grown CART trees; they differ only in row
//! sampling (bootstrap vs full) and threshold selection (best vs random).

use crate::tree::{set_tree_param, SplitterKind, Tree, TreeParams};
use crate::{validate_predict, validate_xy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regressor_spi::{ModelError, ParamValue, Regressor, Result, TunableRegressor};

#[derive(Debug, Clone)]
struct Ensemble {
    n_estimators: usize,
    bootstrap: bool,
    tree_params: TreeParams,
    seed: Option<u64>,
    trees: Vec<Tree>,
    n_features: usize,
}

impl Ensemble {
    fn new(n_estimators: usize, bootstrap: bool, splitter: SplitterKind) -> Self {
        Self {
            n_estimators,
            bootstrap,
            tree_params: TreeParams {
                splitter,
                ..TreeParams::default()
            },
            seed: None,
            trees: Vec::new(),
            n_features: 0,
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        let width = validate_xy(x, y, 2)?;
        let n = x.len();
        let mut rng = self.rng();

        let mut trees = Vec::with_capacity(self.n_estimators);
        for _ in 0..self.n_estimators {
            let idx: Vec<usize> = if self.bootstrap {
                (0..n).map(|_| rng.gen_range(0..n)).collect()
            } else {
                (0..n).collect()
            };
            trees.push(Tree::grow(x, y, &idx, &self.tree_params, &mut rng));
        }

        self.trees = trees;
        self.n_features = width;
        Ok(())
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        if self.trees.is_empty() {
            return Err(ModelError::NotFitted);
        }
        validate_predict(x, self.n_features)?;
        let scale = 1.0 / self.trees.len() as f64;
        Ok(x.iter()
            .map(|row| self.trees.iter().map(|t| t.predict_row(row)).sum::<f64>() * scale)
            .collect())
    }

    fn set_param(&mut self, name: &str, value: &ParamValue) -> Result<()> {
        match name {
            "n_estimators" => {
                let n = value.as_usize().ok_or_else(|| ModelError::InvalidParameter {
                    name: name.to_string(),
                    reason: "expected a positive integer".to_string(),
                })?;
                if n == 0 {
                    return Err(ModelError::InvalidParameter {
                        name: name.to_string(),
                        reason: "must be positive".to_string(),
                    });
                }
                self.n_estimators = n;
                Ok(())
            }
            _ => set_tree_param(&mut self.tree_params, name, value),
        }
    }
}

/// Bootstrap-aggregated forest of CART trees
///
/// Defaults to 10 trees.
///
/// # Example
///
/// ```rust
/// use regressor_core::RandomForestRegressor;
/// use regressor_spi::Regressor;
///
/// let x: Vec<Vec<f64>> = (0..30).map(|i| vec![i as f64]).collect();
/// let y: Vec<f64> = (0..30).map(|i| i as f64 * 2.0).collect();
///
/// let mut forest = RandomForestRegressor::new().with_seed(7);
/// forest.fit(&x, &y).unwrap();
/// assert_eq!(forest.predict(&x).unwrap().len(), 30);
/// ```
#[derive(Debug, Clone)]
pub struct RandomForestRegressor {
    ensemble: Ensemble,
}

impl Default for RandomForestRegressor {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomForestRegressor {
    /// Create an unfitted forest with default parameters
    pub fn new() -> Self {
        Self {
            ensemble: Ensemble::new(10, true, SplitterKind::Best),
        }
    }

    /// Fix the bootstrap/threshold randomness for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.ensemble.seed = Some(seed);
        self
    }

    /// Set the number of trees
    pub fn with_n_estimators(mut self, n: usize) -> Self {
        self.ensemble.n_estimators = n.max(1);
        self
    }
}

impl Regressor for RandomForestRegressor {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        self.ensemble.fit(x, y)
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        self.ensemble.predict(x)
    }

    fn is_fitted(&self) -> bool {
        !self.ensemble.trees.is_empty()
    }
}

impl TunableRegressor for RandomForestRegressor {
    fn set_param(&mut self, name: &str, value: &ParamValue) -> Result<()> {
        self.ensemble.set_param(name, value)
    }
}

/// Extremely randomized trees
///
/// Full-sample trees with uniformly random split thresholds.
#[derive(Debug, Clone)]
pub struct ExtraTreesRegressor {
    ensemble: Ensemble,
}

impl Default for ExtraTreesRegressor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtraTreesRegressor {
    /// Create an unfitted extra-trees ensemble with default parameters
    pub fn new() -> Self {
        Self {
            ensemble: Ensemble::new(10, false, SplitterKind::Random),
        }
    }

    /// Fix the threshold randomness for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.ensemble.seed = Some(seed);
        self
    }
}

impl Regressor for ExtraTreesRegressor {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        self.ensemble.fit(x, y)
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        self.ensemble.predict(x)
    }

    fn is_fitted(&self) -> bool {
        !self.ensemble.trees.is_empty()
    }
}

impl TunableRegressor for ExtraTreesRegressor {
    fn set_param(&mut self, name: &str, value: &ParamValue) -> Result<()> {
        self.ensemble.set_param(name, value)
    }
}

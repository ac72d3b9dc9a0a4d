//! Protocol A: cross-validated grid search.

use crate::metrics::{mean, rmse_from_neg_mse};
use crate::report::render_search_report;
use crate::validation::cross_val_neg_mse;
use harness_api::GridSearchConfig;
use harness_spi::{EstimatorFactory, GridSearchReport, ParamGrid, Result, SearchRecord};

/// Exhaustive grid search scored by cross-validated neg-MSE
///
/// Every configuration in the grid's cross-product gets a fresh estimator
/// from the factory, tuned, and scored by k-fold cross-validation. The
/// empty grid still evaluates the estimator defaults once. After the
/// search the ranked `(RMSE, configuration)` pairs are printed, best
/// raw score first.
#[derive(Debug, Clone, Default)]
pub struct GridSearch {
    config: GridSearchConfig,
}

impl GridSearch {
    pub fn new(config: GridSearchConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Run the search; fold failures abort the whole run.
    pub fn run(
        &self,
        factory: &dyn EstimatorFactory,
        x: &[Vec<f64>],
        y: &[f64],
        grid: &ParamGrid,
    ) -> Result<GridSearchReport> {
        let mut report = GridSearchReport::default();
        for params in grid.iter_sets() {
            let mut estimator = factory.build();
            params.apply_to(estimator.as_mut())?;

            let scores = cross_val_neg_mse(estimator.as_mut(), x, y, self.config.cv)?;
            let mean_score = mean(&scores);
            report.records.push(SearchRecord {
                mean_score,
                rmse: rmse_from_neg_mse(mean_score),
                params,
            });
        }
        if self.config.verbose {
            print!("{}", render_search_report(&report));
        }
        Ok(report)
    }
}

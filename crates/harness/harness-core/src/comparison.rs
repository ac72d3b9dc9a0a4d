//! Protocol C: transformer × estimator comparison matrix.

use crate::metrics::{mean, rmse_from_neg_mse, std_dev};
use crate::validation::cross_val_neg_mse;
use encoding_core::{split_encoded, StandardScaler};
use encoding_spi::{AlignedData, SequenceTransformer};
use harness_api::ComparisonConfig;
use harness_spi::{ComparisonRow, Result};
use regressor_core::build_estimator;
use regressor_spi::EstimatorKind;

/// Transformer × estimator comparison
///
/// For every (strategy, estimator) pair in strategy-major order: encode
/// the aligned records, split off ids and targets, standard-scale the
/// features, score the default-configured estimator by k-fold
/// cross-validation, and emit one row of fold-RMSE mean and standard
/// deviation. Rows keep cross-product order and are never sorted by
/// performance.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    config: ComparisonConfig,
}

impl Comparison {
    pub fn new(config: ComparisonConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Run the full matrix; any cell failure aborts the run.
    pub fn run(
        &self,
        strategies: &[Box<dyn SequenceTransformer>],
        estimators: &[EstimatorKind],
        data: &AlignedData,
    ) -> Result<Vec<ComparisonRow>> {
        let mut rows = Vec::with_capacity(strategies.len() * estimators.len());
        for strategy in strategies {
            let matrix = strategy.transform(data)?;
            let (_, targets, features) = split_encoded(&matrix);
            let scaled = StandardScaler::new().fit_transform(&features)?;

            for &kind in estimators {
                let mut estimator = build_estimator(kind);
                let scores =
                    cross_val_neg_mse(estimator.as_mut(), &scaled, &targets, self.config.cv)?;
                let fold_rmse: Vec<f64> = scores.iter().map(|&s| rmse_from_neg_mse(s)).collect();
                let row = ComparisonRow {
                    strategy: strategy.name().to_string(),
                    estimator: kind.to_string(),
                    mean_rmse: mean(&fold_rmse),
                    std_rmse: std_dev(&fold_rmse),
                };
                if self.config.verbose {
                    println!("{}", row);
                }
                rows.push(row);
            }
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_core::{AminoAcidTransformer, OneHotTransformer};

    fn sample_data(n: usize) -> AlignedData {
        let residues = ['A', 'C', 'D', 'E', 'G'];
        let sequences: Vec<String> = (0..n)
            .map(|i| (0..6).map(|j| residues[(i + j) % residues.len()]).collect())
            .collect();
        AlignedData {
            ids: (0..n).map(|i| i as f64).collect(),
            targets: (0..n).map(|i| (i % 4) as f64 + 0.5).collect(),
            sequences,
        }
    }

    #[test]
    fn test_strategy_major_order() {
        let strategies: Vec<Box<dyn SequenceTransformer>> = vec![
            Box::new(OneHotTransformer::new()),
            Box::new(AminoAcidTransformer::new()),
        ];
        let estimators = [EstimatorKind::Linear, EstimatorKind::DecisionTree];
        let comparison = Comparison::new(ComparisonConfig::default().cv(3).quiet());
        let rows = comparison
            .run(&strategies, &estimators, &sample_data(18))
            .unwrap();

        assert_eq!(rows.len(), 4);
        let pairs: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.strategy.as_str(), r.estimator.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("one_hot", "LinearRegression"),
                ("one_hot", "DecisionTreeRegressor"),
                ("amino_acid", "LinearRegression"),
                ("amino_acid", "DecisionTreeRegressor"),
            ]
        );
    }

    #[test]
    fn test_rmse_non_negative() {
        let strategies: Vec<Box<dyn SequenceTransformer>> =
            vec![Box::new(AminoAcidTransformer::new())];
        let estimators = [EstimatorKind::Linear];
        let comparison = Comparison::new(ComparisonConfig::default().cv(3).quiet());
        let rows = comparison
            .run(&strategies, &estimators, &sample_data(12))
            .unwrap();
        assert!(rows.iter().all(|r| r.mean_rmse >= 0.0 && r.std_rmse >= 0.0));
    }

    #[test]
    fn test_cv_exceeding_samples_propagates() {
        let strategies: Vec<Box<dyn SequenceTransformer>> =
            vec![Box::new(OneHotTransformer::new())];
        let comparison = Comparison::new(ComparisonConfig::default().cv(10).quiet());
        assert!(comparison
            .run(&strategies, &[EstimatorKind::Linear], &sample_data(5))
            .is_err());
    }
}

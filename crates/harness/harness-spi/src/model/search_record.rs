//! Grid search results.

use crate::model::ParamSet;
use serde::{Deserialize, Serialize};

/// Outcome of one configuration trial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Mean neg-MSE across folds; higher is better
    pub mean_score: f64,
    /// `sqrt(-mean_score)`
    pub rmse: f64,
    /// The configuration that produced the score
    pub params: ParamSet,
}

/// All configuration trials of one grid search, in evaluation order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridSearchReport {
    pub records: Vec<SearchRecord>,
}

impl GridSearchReport {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ranked by raw mean score descending (best first). NaN scores
    /// sink to the end.
    pub fn ranked(&self) -> Vec<&SearchRecord> {
        let mut ranked: Vec<&SearchRecord> = self.records.iter().collect();
        ranked.sort_by(|a, b| {
            b.mean_score
                .partial_cmp(&a.mean_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    /// The best-scoring record, if any.
    pub fn best(&self) -> Option<&SearchRecord> {
        self.ranked().into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(mean_score: f64) -> SearchRecord {
        SearchRecord {
            mean_score,
            rmse: (-mean_score).sqrt(),
            params: ParamSet::empty(),
        }
    }

    #[test]
    fn test_ranked_descending() {
        let report = GridSearchReport {
            records: vec![record(-4.0), record(-1.0), record(-9.0)],
        };
        let scores: Vec<f64> = report.ranked().iter().map(|r| r.mean_score).collect();
        assert_eq!(scores, vec![-1.0, -4.0, -9.0]);
    }

    #[test]
    fn test_best() {
        let report = GridSearchReport {
            records: vec![record(-4.0), record(-1.0)],
        };
        assert_eq!(report.best().map(|r| r.mean_score), Some(-1.0));
        assert!((report.best().map(|r| r.rmse).unwrap_or(f64::NAN) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_report() {
        let report = GridSearchReport::default();
        assert!(report.is_empty());
        assert!(report.best().is_none());
    }
}

//! Harness Consumer API
//!
//! Configuration types for the three evaluation protocols.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use harness_spi::{
    ComparisonRow, EstimatorFactory, GridSearchReport, HarnessError, HoldoutTrace, ParamGrid,
    ParamSet, Result, SearchRecord,
};

/// Configuration for cross-validated grid search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSearchConfig {
    /// Number of cross-validation folds
    pub cv: usize,
    /// Print each ranked (RMSE, configuration) pair after the search
    pub verbose: bool,
}

impl Default for GridSearchConfig {
    fn default() -> Self {
        Self { cv: 10, verbose: true }
    }
}

impl GridSearchConfig {
    /// Set the fold count.
    pub fn cv(mut self, cv: usize) -> Self {
        self.cv = cv;
        self
    }

    /// Suppress the ranked report printout.
    pub fn quiet(mut self) -> Self {
        self.verbose = false;
        self
    }
}

/// Configuration for repeated randomized holdout evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldoutConfig {
    /// Number of repetitions
    pub tests: usize,
    /// Holdout fraction of the sample count; test size is its ceiling
    pub test_size: f64,
    /// Fixed RNG seed; `None` draws fresh entropy per run
    pub seed: Option<u64>,
}

impl Default for HoldoutConfig {
    fn default() -> Self {
        Self {
            tests: 25,
            test_size: 0.05,
            seed: None,
        }
    }
}

impl HoldoutConfig {
    /// Set the repetition count; zero repeats yield an empty trace.
    pub fn tests(mut self, tests: usize) -> Self {
        self.tests = tests;
        self
    }

    /// Set the holdout fraction, clamped to (0, 1).
    pub fn test_size(mut self, fraction: f64) -> Self {
        self.test_size = fraction.clamp(f64::MIN_POSITIVE, 1.0 - f64::EPSILON);
        self
    }

    /// Fix the RNG seed for reproducible splits.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Configuration for the transformer × estimator comparison matrix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Number of cross-validation folds per cell
    pub cv: usize,
    /// Print each row as it is evaluated
    pub verbose: bool,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self { cv: 10, verbose: true }
    }
}

impl ComparisonConfig {
    /// Set the fold count.
    pub fn cv(mut self, cv: usize) -> Self {
        self.cv = cv;
        self
    }

    /// Suppress row printing.
    pub fn quiet(mut self) -> Self {
        self.verbose = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_search_defaults() {
        let config = GridSearchConfig::default();
        assert_eq!(config.cv, 10);
        assert!(config.verbose);
    }

    #[test]
    fn test_holdout_defaults() {
        let config = HoldoutConfig::default();
        assert_eq!(config.tests, 25);
        assert!((config.test_size - 0.05).abs() < 1e-12);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_holdout_builder_clamps() {
        let config = HoldoutConfig::default().test_size(1.5).seed(9);
        assert!(config.test_size < 1.0);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_holdout_builder_allows_zero_repeats() {
        let config = HoldoutConfig::default().tests(0);
        assert_eq!(config.tests, 0);
    }

    #[test]
    fn test_comparison_defaults() {
        let config = ComparisonConfig::default();
        assert_eq!(config.cv, 10);
    }
}

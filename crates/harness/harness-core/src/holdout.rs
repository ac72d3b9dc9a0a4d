//! Protocol B: repeated randomized holdout.

use crate::validation::{shuffled_split, take_rows, take_values};
use harness_api::HoldoutConfig;
use harness_spi::{HoldoutTrace, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regressor_spi::Regressor;

/// Repeated randomized holdout evaluation
///
/// Each repetition draws an independent shuffled split, refits the single
/// estimator on the training portion, predicts the holdout, and appends
/// targets and predictions to the accumulated trace. The protocol computes
/// no aggregate itself.
#[derive(Debug, Clone, Default)]
pub struct HoldoutEvaluation {
    config: HoldoutConfig,
}

impl HoldoutEvaluation {
    pub fn new(config: HoldoutConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Run every repetition; a failing fit or predict aborts the run.
    pub fn run(
        &self,
        estimator: &mut dyn Regressor,
        x: &[Vec<f64>],
        y: &[f64],
    ) -> Result<HoldoutTrace> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut trace = HoldoutTrace::new();
        for _ in 0..self.config.tests {
            let (train, test) = shuffled_split(x.len(), self.config.test_size, &mut rng)?;
            estimator.fit(&take_rows(x, &train), &take_values(y, &train))?;
            let predicted = estimator.predict(&take_rows(x, &test))?;
            trace.extend(&take_values(y, &test), &predicted);
        }
        Ok(trace)
    }
}

//! Repeated holdout accumulation.

use serde::{Deserialize, Serialize};

/// Accumulated predictions of a repeated randomized holdout run
///
/// Every repetition appends its test targets and predictions to two
/// parallel sequences. The protocol itself computes no aggregate; the
/// [`rmse`](HoldoutTrace::rmse) reduction over the pooled pairs is opt-in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoldoutTrace {
    /// True target values, in accumulation order
    pub actual: Vec<f64>,
    /// Predicted values, parallel to `actual`
    pub predicted: Vec<f64>,
}

impl HoldoutTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one repetition's targets and predictions.
    pub fn extend(&mut self, actual: &[f64], predicted: &[f64]) {
        self.actual.extend_from_slice(actual);
        self.predicted.extend_from_slice(predicted);
    }

    /// Number of accumulated pairs.
    pub fn len(&self) -> usize {
        self.actual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actual.is_empty()
    }

    /// Pooled RMSE over every accumulated pair, or `None` when empty.
    pub fn rmse(&self) -> Option<f64> {
        if self.actual.is_empty() || self.actual.len() != self.predicted.len() {
            return None;
        }
        let sse: f64 = self
            .actual
            .iter()
            .zip(self.predicted.iter())
            .map(|(a, p)| (a - p) * (a - p))
            .sum();
        Some((sse / self.actual.len() as f64).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_accumulates_in_order() {
        let mut trace = HoldoutTrace::new();
        trace.extend(&[1.0, 2.0], &[1.5, 2.5]);
        trace.extend(&[3.0], &[2.0]);
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.actual, vec![1.0, 2.0, 3.0]);
        assert_eq!(trace.predicted, vec![1.5, 2.5, 2.0]);
    }

    #[test]
    fn test_rmse_pooled() {
        let mut trace = HoldoutTrace::new();
        trace.extend(&[0.0, 0.0], &[3.0, 4.0]);
        // sqrt((9 + 16) / 2)
        assert!((trace.rmse().unwrap() - (12.5f64).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_rmse_empty_is_none() {
        assert_eq!(HoldoutTrace::new().rmse(), None);
    }
}

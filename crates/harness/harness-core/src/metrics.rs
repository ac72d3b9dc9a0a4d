//! Scoring metrics.

/// Arithmetic mean; NaN when empty.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; NaN when empty.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Mean squared error; NaN on length mismatch or empty input.
pub fn mse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.is_empty() || actual.len() != predicted.len() {
        return f64::NAN;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p) * (a - p))
        .sum::<f64>()
        / actual.len() as f64
}

/// Negated MSE: the cross-validation score where higher is better.
pub fn neg_mse(actual: &[f64], predicted: &[f64]) -> f64 {
    -mse(actual, predicted)
}

/// Root mean squared error.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
    mse(actual, predicted).sqrt()
}

/// RMSE recovered from a neg-MSE score.
pub fn rmse_from_neg_mse(score: f64) -> f64 {
    (-score).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std() {
        assert!((mean(&[1.0, 2.0, 3.0]) - 2.0).abs() < 1e-12);
        assert!((std_dev(&[2.0, 4.0]) - 1.0).abs() < 1e-12);
        assert!(mean(&[]).is_nan());
        assert!(std_dev(&[]).is_nan());
    }

    #[test]
    fn test_mse_rmse() {
        let actual = [1.0, 2.0, 3.0];
        let predicted = [1.0, 2.0, 5.0];
        assert!((mse(&actual, &predicted) - 4.0 / 3.0).abs() < 1e-12);
        assert!((rmse(&actual, &predicted) - (4.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_mismatched_lengths_are_nan() {
        assert!(mse(&[1.0], &[1.0, 2.0]).is_nan());
        assert!(rmse(&[], &[]).is_nan());
    }

    #[test]
    fn test_neg_mse_round_trip() {
        let actual = [0.0, 0.0];
        let predicted = [2.0, 2.0];
        let score = neg_mse(&actual, &predicted);
        assert!(score < 0.0);
        assert!((rmse_from_neg_mse(score) - 2.0).abs() < 1e-12);
    }
}

//! Data splitting and cross-validation scoring.

use crate::metrics::neg_mse;
use harness_spi::{HarnessError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use regressor_spi::Regressor;

/// Contiguous k-fold index splits
///
/// Indices are not shuffled; the first `n % k` folds take one extra
/// sample. Returns `(train, test)` index pairs per fold.
pub fn k_fold_split(n: usize, k: usize) -> Result<Vec<(Vec<usize>, Vec<usize>)>> {
    if k < 2 {
        return Err(HarnessError::InvalidParameter {
            name: "cv".to_string(),
            reason: format!("fold count must be at least 2, got {}", k),
        });
    }
    if k > n {
        return Err(HarnessError::InsufficientData {
            required: k,
            actual: n,
        });
    }
    let base = n / k;
    let extra = n % k;
    let mut folds = Vec::with_capacity(k);
    let mut start = 0;
    for fold in 0..k {
        let size = base + usize::from(fold < extra);
        let test: Vec<usize> = (start..start + size).collect();
        let train: Vec<usize> = (0..start).chain(start + size..n).collect();
        folds.push((train, test));
        start += size;
    }
    Ok(folds)
}

/// One randomized train/test split
///
/// Test size is `ceil(test_size * n)`, matching the sizing the protocols
/// specify. Returns `(train, test)` index vectors.
pub fn shuffled_split(
    n: usize,
    test_size: f64,
    rng: &mut StdRng,
) -> Result<(Vec<usize>, Vec<usize>)> {
    let test_count = (test_size * n as f64).ceil() as usize;
    if test_count == 0 || test_count >= n {
        return Err(HarnessError::InvalidParameter {
            name: "test_size".to_string(),
            reason: format!(
                "holdout of {} samples leaves no usable split of {}",
                test_count, n
            ),
        });
    }
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    let test = indices.split_off(n - test_count);
    Ok((indices, test))
}

/// Select rows of a feature matrix by index.
pub fn take_rows(x: &[Vec<f64>], indices: &[usize]) -> Vec<Vec<f64>> {
    indices.iter().map(|&i| x[i].clone()).collect()
}

/// Select entries of a target vector by index.
pub fn take_values(y: &[f64], indices: &[usize]) -> Vec<f64> {
    indices.iter().map(|&i| y[i]).collect()
}

/// Per-fold neg-MSE scores of an estimator under k-fold cross-validation
///
/// The estimator is refit from scratch on every fold's training portion;
/// any fold failure aborts the whole run.
pub fn cross_val_neg_mse(
    estimator: &mut dyn Regressor,
    x: &[Vec<f64>],
    y: &[f64],
    cv: usize,
) -> Result<Vec<f64>> {
    let folds = k_fold_split(x.len(), cv)?;
    let mut scores = Vec::with_capacity(folds.len());
    for (train, test) in folds {
        let x_train = take_rows(x, &train);
        let y_train = take_values(y, &train);
        estimator.fit(&x_train, &y_train)?;

        let x_test = take_rows(x, &test);
        let y_test = take_values(y, &test);
        let predicted = estimator.predict(&x_test)?;
        scores.push(neg_mse(&y_test, &predicted));
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use regressor_core::LinearRegression;

    #[test]
    fn test_k_fold_contiguous_sizes() {
        let folds = k_fold_split(10, 3).unwrap();
        assert_eq!(folds.len(), 3);
        // 10 % 3 == 1: the first fold takes the extra sample.
        assert_eq!(folds[0].1, vec![0, 1, 2, 3]);
        assert_eq!(folds[1].1, vec![4, 5, 6]);
        assert_eq!(folds[2].1, vec![7, 8, 9]);
        assert_eq!(folds[0].0.len(), 6);
    }

    #[test]
    fn test_k_fold_covers_every_index_once() {
        let folds = k_fold_split(17, 5).unwrap();
        let mut seen: Vec<usize> = folds.iter().flat_map(|(_, test)| test.clone()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..17).collect::<Vec<usize>>());
    }

    #[test]
    fn test_k_fold_too_few_samples() {
        assert!(matches!(
            k_fold_split(5, 10).unwrap_err(),
            HarnessError::InsufficientData {
                required: 10,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_k_fold_rejects_single_fold() {
        assert!(matches!(
            k_fold_split(10, 1).unwrap_err(),
            HarnessError::InvalidParameter { .. }
        ));
    }

    #[test]
    fn test_shuffled_split_ceil_sizing() {
        let mut rng = StdRng::seed_from_u64(0);
        // ceil(0.05 * 30) == 2
        let (train, test) = shuffled_split(30, 0.05, &mut rng).unwrap();
        assert_eq!(test.len(), 2);
        assert_eq!(train.len(), 28);

        let mut all: Vec<usize> = train.iter().chain(test.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..30).collect::<Vec<usize>>());
    }

    #[test]
    fn test_shuffled_split_degenerate() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(shuffled_split(2, 0.99, &mut rng).is_err());
    }

    #[test]
    fn test_cross_val_scores_shape() {
        let x: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64]).collect();
        let y: Vec<f64> = x.iter().map(|r| 3.0 * r[0]).collect();
        let mut model = LinearRegression::new();
        let scores = cross_val_neg_mse(&mut model, &x, &y, 5).unwrap();
        assert_eq!(scores.len(), 5);
        // A linear model nails a linear target: scores near zero from below.
        assert!(scores.iter().all(|&s| s <= 1e-9 && s > -1e-6));
    }
}

//! Ordinary least squares linear regression
//!
//! Solves the normal equations by Gaussian elimination with partial
//! pivoting. A tiny diagonal jitter keeps the normal matrix solvable for
//! the collinear columns one-hot sequence encodings routinely produce.

use crate::{validate_predict, validate_xy};
use regressor_spi::{ModelError, ParamValue, Regressor, Result, TunableRegressor};
use serde::{Deserialize, Serialize};

const RIDGE_JITTER: f64 = 1e-8;

/// Ordinary least squares regressor with intercept
///
/// # Example
///
/// ```rust
/// use regressor_core::LinearRegression;
/// use regressor_spi::Regressor;
///
/// let x = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
/// let y = vec![1.0, 3.0, 5.0, 7.0];
///
/// let mut model = LinearRegression::new();
/// model.fit(&x, &y).unwrap();
/// let preds = model.predict(&[vec![4.0]]).unwrap();
/// assert!((preds[0] - 9.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinearRegression {
    coefficients: Vec<f64>,
    intercept: f64,
    n_features: usize,
    fitted: bool,
}

impl LinearRegression {
    /// Create an unfitted linear regressor
    pub fn new() -> Self {
        Self::default()
    }

    /// Fitted feature coefficients
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Fitted intercept term
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Regressor for LinearRegression {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        let width = validate_xy(x, y, 2)?;
        let p = width + 1; // intercept column appended last

        // Normal equations: (A^T A) beta = A^T y with A = [X | 1].
        let mut ata = vec![vec![0.0; p]; p];
        let mut aty = vec![0.0; p];
        for (row, &target) in x.iter().zip(y.iter()) {
            for i in 0..p {
                let ai = if i < width { row[i] } else { 1.0 };
                aty[i] += ai * target;
                for j in i..p {
                    let aj = if j < width { row[j] } else { 1.0 };
                    ata[i][j] += ai * aj;
                }
            }
        }
        for i in 0..p {
            for j in 0..i {
                ata[i][j] = ata[j][i];
            }
            ata[i][i] += RIDGE_JITTER;
        }

        let beta = solve(&mut ata, &mut aty)?;
        self.intercept = beta[width];
        self.coefficients = beta[..width].to_vec();
        self.n_features = width;
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }
        validate_predict(x, self.n_features)?;
        Ok(x.iter()
            .map(|row| {
                self.intercept
                    + row
                        .iter()
                        .zip(self.coefficients.iter())
                        .map(|(v, c)| v * c)
                        .sum::<f64>()
            })
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

impl TunableRegressor for LinearRegression {
    fn set_param(&mut self, name: &str, _value: &ParamValue) -> Result<()> {
        Err(ModelError::InvalidParameter {
            name: name.to_string(),
            reason: "linear regression has no tunable parameters".to_string(),
        })
    }
}

/// Solve a dense symmetric system in place by Gaussian elimination.
fn solve(a: &mut [Vec<f64>], b: &mut [f64]) -> Result<Vec<f64>> {
    let n = b.len();
    for col in 0..n {
        // Partial pivoting
        let pivot = (col..n)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .unwrap_or(col);
        if a[pivot][col].abs() < 1e-12 {
            return Err(ModelError::NumericalError(
                "normal matrix is singular".to_string(),
            ));
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut solution = vec![0.0; n];
    for row in (0..n).rev() {
        let mut acc = b[row];
        for col in (row + 1)..n {
            acc -= a[row][col] * solution[col];
        }
        solution[row] = acc / a[row][row];
    }
    Ok(solution)
}

//! Column-wise standard scaling.

use encoding_spi::{EncodingError, Result};
use serde::{Deserialize, Serialize};

/// Column-wise `(x - mean) / std` feature scaler
///
/// Uses the population standard deviation. Zero-variance columns map to
/// 0 rather than dividing by zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandardScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
    fitted: bool,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learn per-column means and standard deviations.
    pub fn fit(&mut self, x: &[Vec<f64>]) -> Result<()> {
        let first = x.first().ok_or(EncodingError::EmptyInput)?;
        let width = first.len();
        for row in x {
            if row.len() != width {
                return Err(EncodingError::DimensionMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
        }
        let n = x.len() as f64;
        let mut means = vec![0.0; width];
        for row in x {
            for (m, &v) in means.iter_mut().zip(row.iter()) {
                *m += v;
            }
        }
        for m in means.iter_mut() {
            *m /= n;
        }
        let mut stds = vec![0.0; width];
        for row in x {
            for ((s, &v), &m) in stds.iter_mut().zip(row.iter()).zip(means.iter()) {
                *s += (v - m) * (v - m);
            }
        }
        for s in stds.iter_mut() {
            *s = (*s / n).sqrt();
        }
        self.means = means;
        self.stds = stds;
        self.fitted = true;
        Ok(())
    }

    /// Scale rows with the fitted statistics.
    pub fn transform(&self, x: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        if !self.fitted {
            return Err(EncodingError::NotFitted);
        }
        x.iter()
            .map(|row| {
                if row.len() != self.means.len() {
                    return Err(EncodingError::DimensionMismatch {
                        expected: self.means.len(),
                        actual: row.len(),
                    });
                }
                Ok(row
                    .iter()
                    .zip(self.means.iter().zip(self.stds.iter()))
                    .map(|(&v, (&m, &s))| if s > 0.0 { (v - m) / s } else { 0.0 })
                    .collect())
            })
            .collect()
    }

    /// Fit and transform in one step.
    pub fn fit_transform(&mut self, x: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        self.fit(x)?;
        self.transform(x)
    }
}

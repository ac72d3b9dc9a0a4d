//! Epsilon-insensitive kernel support vector regression
//!
//! Trains dual coefficients by clipped subgradient descent on the
//! epsilon-insensitive loss. The bias is folded into the kernel as a
//! constant offset, so only the alphas are learned. Parameter names match
//! the grid keys of the original SVR search.

use crate::{validate_predict, validate_xy};
use regressor_spi::{ModelError, ParamValue, Regressor, Result, TunableRegressor};
use serde::{Deserialize, Serialize};

/// Kernel functions available to [`KernelSvr`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kernel {
    Linear,
    Poly,
    Rbf,
    Sigmoid,
}

impl Kernel {
    /// Parse the sklearn-style kernel name.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "linear" => Ok(Kernel::Linear),
            "poly" => Ok(Kernel::Poly),
            "rbf" => Ok(Kernel::Rbf),
            "sigmoid" => Ok(Kernel::Sigmoid),
            _ => Err(ModelError::InvalidParameter {
                name: "kernel".to_string(),
                reason: format!("unknown kernel '{}'", name),
            }),
        }
    }
}

/// Gamma parameter: `auto` resolves to `1 / n_features` at fit time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
enum Gamma {
    Auto,
    Value(f64),
}

/// Kernel SVR with epsilon-insensitive loss
///
/// # Example
///
/// ```rust
/// use regressor_core::{Kernel, KernelSvr};
/// use regressor_spi::Regressor;
///
/// let x: Vec<Vec<f64>> = (0..30).map(|i| vec![i as f64 * 0.1]).collect();
/// let y: Vec<f64> = x.iter().map(|r| 2.0 * r[0] + 1.0).collect();
///
/// let mut svr = KernelSvr::new(Kernel::Rbf);
/// svr.fit(&x, &y).unwrap();
/// assert_eq!(svr.predict(&x).unwrap().len(), 30);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelSvr {
    kernel: Kernel,
    degree: u32,
    gamma: Gamma,
    coef0: f64,
    c: f64,
    epsilon: f64,
    tol: f64,
    max_iter: usize,
    // Fitted state
    alphas: Vec<f64>,
    support: Vec<Vec<f64>>,
    gamma_value: f64,
    n_features: usize,
    fitted: bool,
}

impl KernelSvr {
    /// Create an unfitted SVR with the given kernel and sklearn defaults
    pub fn new(kernel: Kernel) -> Self {
        Self {
            kernel,
            degree: 3,
            gamma: Gamma::Auto,
            coef0: 0.0,
            c: 1.0,
            epsilon: 0.1,
            tol: 1e-3,
            max_iter: 200,
            alphas: Vec::new(),
            support: Vec::new(),
            gamma_value: 0.0,
            n_features: 0,
            fitted: false,
        }
    }

    /// Set the regularization constant
    pub fn with_c(mut self, c: f64) -> Self {
        self.c = c.max(1e-9);
        self
    }

    /// Set the epsilon-insensitive tube width
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.max(0.0);
        self
    }

    fn kernel_value(&self, a: &[f64], b: &[f64]) -> f64 {
        let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let raw = match self.kernel {
            Kernel::Linear => dot,
            Kernel::Poly => (self.gamma_value * dot + self.coef0).powi(self.degree as i32),
            Kernel::Rbf => {
                let sq: f64 = a
                    .iter()
                    .zip(b.iter())
                    .map(|(x, y)| (x - y) * (x - y))
                    .sum();
                (-self.gamma_value * sq).exp()
            }
            Kernel::Sigmoid => (self.gamma_value * dot + self.coef0).tanh(),
        };
        // Constant offset stands in for an explicit bias term.
        raw + 1.0
    }
}

impl Regressor for KernelSvr {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        let width = validate_xy(x, y, 2)?;
        self.gamma_value = match self.gamma {
            Gamma::Auto => 1.0 / width as f64,
            Gamma::Value(v) => v,
        };
        self.n_features = width;
        self.support = x.to_vec();

        let n = x.len();
        let mut gram = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i..n {
                let k = self.kernel_value(&x[i], &x[j]);
                gram[i][j] = k;
                gram[j][i] = k;
            }
        }
        if gram.iter().any(|row| row.iter().any(|v| !v.is_finite())) {
            return Err(ModelError::NumericalError(
                "kernel matrix contains non-finite values".to_string(),
            ));
        }

        let mut alphas = vec![0.0; n];
        for _ in 0..self.max_iter {
            let mut max_step = 0.0_f64;
            for i in 0..n {
                let f_i: f64 = (0..n).map(|j| alphas[j] * gram[i][j]).sum();
                let err = f_i - y[i];
                let excess = err.abs() - self.epsilon;
                if excess <= 0.0 {
                    continue;
                }
                let step = (excess / (gram[i][i] + 1e-12)).min(self.c) * err.signum();
                let updated = (alphas[i] - step).clamp(-self.c, self.c);
                max_step = max_step.max((updated - alphas[i]).abs());
                alphas[i] = updated;
            }
            if max_step < self.tol {
                break;
            }
        }

        self.alphas = alphas;
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
                self.support
                    .iter()
                    .zip(self.alphas.iter())
                    .map(|(sv, alpha)| alpha * self.kernel_value(sv, row))
                    .sum()
            })
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

impl TunableRegressor for KernelSvr {
    fn set_param(&mut self, name: &str, value: &ParamValue) -> Result<()> {
        let invalid = |reason: &str| ModelError::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        };
        match name {
            "kernel" => {
                let text = value.as_str().ok_or_else(|| invalid("expected a kernel name"))?;
                self.kernel = Kernel::parse(text)?;
            }
            "degree" => {
                let d = value.as_usize().ok_or_else(|| invalid("expected a positive integer"))?;
                if d == 0 {
                    return Err(invalid("must be positive"));
                }
                self.degree = d as u32;
            }
            "gamma" => {
                self.gamma = match value {
                    ParamValue::Text(s) if s == "auto" => Gamma::Auto,
                    _ => {
                        let v = value.as_f64().ok_or_else(|| invalid("expected 'auto' or a number"))?;
                        if v <= 0.0 {
                            return Err(invalid("must be positive"));
                        }
                        Gamma::Value(v)
                    }
                };
            }
            "coef0" => {
                self.coef0 = value.as_f64().ok_or_else(|| invalid("expected a number"))?;
            }
            "epsilon" => {
                let e = value.as_f64().ok_or_else(|| invalid("expected a number"))?;
                if e < 0.0 {
                    return Err(invalid("must be non-negative"));
                }
                self.epsilon = e;
            }
            "tol" => {
                let t = value.as_f64().ok_or_else(|| invalid("expected a number"))?;
                if t <= 0.0 {
                    return Err(invalid("must be positive"));
                }
                self.tol = t;
            }
            "C" | "c" => {
                let c = value.as_f64().ok_or_else(|| invalid("expected a number"))?;
                if c <= 0.0 {
                    return Err(invalid("must be positive"));
                }
                self.c = c;
            }
            _ => return Err(invalid("unknown parameter")),
        }
        Ok(())
    }
}

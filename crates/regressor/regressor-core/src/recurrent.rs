//! Stacked recurrent network regressor
//!
//! A stack of simple (Elman) recurrent layers with tanh activations,
//! inverted dropout between layers during training, and a linear readout
//! from the final hidden state. Each input row is treated as a sequence of
//! scalar timesteps. Trained with mini-batch Adam on mean squared error,
//! gradients computed by full backpropagation through time.

use crate::{validate_predict, validate_xy};
use rand::rngs::StdRng;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use regressor_api::RecurrentConfig;
use regressor_spi::{ModelError, ParamValue, Regressor, Result, TunableRegressor};

const ADAM_BETA1: f64 = 0.9;
const ADAM_BETA2: f64 = 0.999;
const ADAM_EPS: f64 = 1e-8;

/// Weights of one recurrent layer.
#[derive(Debug, Clone)]
struct LayerWeights {
    /// Input projection, `units x input_dim`
    wx: Vec<Vec<f64>>,
    /// Hidden recurrence, `units x units`
    wh: Vec<Vec<f64>>,
    /// Bias, length `units`
    b: Vec<f64>,
}

impl LayerWeights {
    fn glorot(input_dim: usize, units: usize, rng: &mut StdRng) -> Self {
        let limit_x = (6.0 / (input_dim + units) as f64).sqrt();
        let limit_h = (6.0 / (2 * units) as f64).sqrt();
        let mut matrix = |rows: usize, cols: usize, limit: f64, rng: &mut StdRng| {
            (0..rows)
                .map(|_| (0..cols).map(|_| rng.gen_range(-limit..limit)).collect())
                .collect::<Vec<Vec<f64>>>()
        };
        Self {
            wx: matrix(units, input_dim, limit_x, rng),
            wh: matrix(units, units, limit_h, rng),
            b: vec![0.0; units],
        }
    }

    fn zeros_like(&self) -> Self {
        Self {
            wx: self.wx.iter().map(|r| vec![0.0; r.len()]).collect(),
            wh: self.wh.iter().map(|r| vec![0.0; r.len()]).collect(),
            b: vec![0.0; self.b.len()],
        }
    }
}

/// Adam first/second moment mirrors for one layer.
#[derive(Debug, Clone)]
struct AdamState {
    m: LayerWeights,
    v: LayerWeights,
}

/// Forward activations of one layer over a sequence.
struct LayerTrace {
    /// Hidden states per timestep, each length `units`
    hidden: Vec<Vec<f64>>,
    /// Inputs seen per timestep (post-dropout for stacked layers)
    inputs: Vec<Vec<f64>>,
}

/// Recurrent network regressor over scalar sequences
///
/// Configuration comes from [`RecurrentConfig`]; the default stack is
/// three layers of 64 units with dropout 0.5 between them.
#[derive(Debug, Clone)]
pub struct RecurrentRegressor {
    config: RecurrentConfig,
    seed: Option<u64>,
    layers: Vec<LayerWeights>,
    readout_w: Vec<f64>,
    readout_b: f64,
    input_scale: f64,
    n_features: usize,
    fitted: bool,
}

impl Default for RecurrentRegressor {
    fn default() -> Self {
        Self::new(RecurrentConfig::default())
    }
}

impl RecurrentRegressor {
    /// Create an unfitted network from a configuration
    pub fn new(config: RecurrentConfig) -> Self {
        Self {
            config,
            seed: None,
            layers: Vec::new(),
            readout_w: Vec::new(),
            readout_b: 0.0,
            input_scale: 1.0,
            n_features: 0,
            fitted: false,
        }
    }

    /// Fix the RNG seed for weight init, dropout, and batch shuffling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Mutable access to the training configuration
    pub fn config_mut(&mut self) -> &mut RecurrentConfig {
        &mut self.config
    }

    fn forward(
        &self,
        row: &[f64],
        dropout_masks: Option<&[Vec<f64>]>,
    ) -> (Vec<LayerTrace>, f64) {
        let steps = row.len();
        let mut traces = Vec::with_capacity(self.layers.len());
        let mut sequence: Vec<Vec<f64>> = row
            .iter()
            .map(|&v| vec![v * self.input_scale])
            .collect();

        for (l, layer) in self.layers.iter().enumerate() {
            let units = layer.b.len();
            let mut hidden = Vec::with_capacity(steps);
            let mut prev = vec![0.0; units];
            for input in &sequence {
                let mut h = layer.b.clone();
                for (u, hu) in h.iter_mut().enumerate() {
                    for (i, &xi) in input.iter().enumerate() {
                        *hu += layer.wx[u][i] * xi;
                    }
                    for (j, &pj) in prev.iter().enumerate() {
                        *hu += layer.wh[u][j] * pj;
                    }
                    *hu = hu.tanh();
                }
                prev = h.clone();
                hidden.push(h);
            }
            let inputs = std::mem::replace(&mut sequence, hidden.clone());
            // Dropout between layers only; the top layer feeds the readout.
            if l + 1 < self.layers.len() {
                if let Some(masks) = dropout_masks {
                    for state in sequence.iter_mut() {
                        for (v, &m) in state.iter_mut().zip(masks[l].iter()) {
                            *v *= m;
                        }
                    }
                }
            }
            traces.push(LayerTrace { hidden, inputs });
        }

        let last = traces
            .last()
            .and_then(|t| t.hidden.last())
            .cloned()
            .unwrap_or_default();
        let output = self.readout_b
            + last
                .iter()
                .zip(self.readout_w.iter())
                .map(|(h, w)| h * w)
                .sum::<f64>();
        (traces, output)
    }

    /// Accumulate BPTT gradients for one sample into `grads`.
    #[allow(clippy::too_many_arguments)]
    fn backward(
        &self,
        traces: &[LayerTrace],
        dropout_masks: &[Vec<f64>],
        d_output: f64,
        grads: &mut [LayerWeights],
        grad_readout_w: &mut [f64],
        grad_readout_b: &mut f64,
    ) {
        let n_layers = self.layers.len();
        let steps = traces[0].hidden.len();

        // d_hidden[l][t]: gradient flowing into the hidden state of layer l
        // at timestep t.
        let mut d_hidden: Vec<Vec<Vec<f64>>> = self
            .layers
            .iter()
            .map(|layer| vec![vec![0.0; layer.b.len()]; steps])
            .collect();

        let top_last = &traces[n_layers - 1].hidden[steps - 1];
        *grad_readout_b += d_output;
        for (u, (&h, g)) in top_last.iter().zip(grad_readout_w.iter_mut()).enumerate() {
            *g += d_output * h;
            d_hidden[n_layers - 1][steps - 1][u] += d_output * self.readout_w[u];
        }

        for t in (0..steps).rev() {
            for l in (0..n_layers).rev() {
                let layer = &self.layers[l];
                let trace = &traces[l];
                let units = layer.b.len();
                // Pre-activation gradient through tanh.
                let da: Vec<f64> = (0..units)
                    .map(|u| {
                        let h = trace.hidden[t][u];
                        d_hidden[l][t][u] * (1.0 - h * h)
                    })
                    .collect();

                for (u, &dau) in da.iter().enumerate() {
                    grads[l].b[u] += dau;
                    for (i, &xi) in trace.inputs[t].iter().enumerate() {
                        grads[l].wx[u][i] += dau * xi;
                    }
                    if t > 0 {
                        for j in 0..units {
                            grads[l].wh[u][j] += dau * trace.hidden[t - 1][j];
                            d_hidden[l][t - 1][j] += dau * layer.wh[u][j];
                        }
                    }
                }
                // Propagate into the hidden state of the layer below, undoing
                // the inverted-dropout scaling applied on the way up.
                if l > 0 {
                    let below = d_hidden[l - 1][t].len();
                    for j in 0..below {
                        let mut acc = 0.0;
                        for (u, &dau) in da.iter().enumerate() {
                            acc += dau * layer.wx[u][j];
                        }
                        d_hidden[l - 1][t][j] += acc * dropout_masks[l - 1][j];
                    }
                }
            }
        }
    }

    fn adam_update(
        layer: &mut LayerWeights,
        grad: &LayerWeights,
        state: &mut AdamState,
        lr: f64,
        step: i32,
    ) {
        let correct1 = 1.0 - ADAM_BETA1.powi(step);
        let correct2 = 1.0 - ADAM_BETA2.powi(step);
        let mut apply = |w: &mut f64, g: f64, m: &mut f64, v: &mut f64| {
            *m = ADAM_BETA1 * *m + (1.0 - ADAM_BETA1) * g;
            *v = ADAM_BETA2 * *v + (1.0 - ADAM_BETA2) * g * g;
            let m_hat = *m / correct1;
            let v_hat = *v / correct2;
            *w -= lr * m_hat / (v_hat.sqrt() + ADAM_EPS);
        };
        for u in 0..layer.b.len() {
            for i in 0..layer.wx[u].len() {
                apply(
                    &mut layer.wx[u][i],
                    grad.wx[u][i],
                    &mut state.m.wx[u][i],
                    &mut state.v.wx[u][i],
                );
            }
            for j in 0..layer.wh[u].len() {
                apply(
                    &mut layer.wh[u][j],
                    grad.wh[u][j],
                    &mut state.m.wh[u][j],
                    &mut state.v.wh[u][j],
                );
            }
            apply(&mut layer.b[u], grad.b[u], &mut state.m.b[u], &mut state.v.b[u]);
        }
    }
}

impl Regressor for RecurrentRegressor {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        let width = validate_xy(x, y, 2)?;
        let units = self.config.resolved_layer_units();
        if units.iter().any(|&u| u == 0) {
            return Err(ModelError::InvalidParameter {
                name: "layer_units".to_string(),
                reason: "layer sizes must be positive".to_string(),
            });
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // Scale inputs into roughly [-1, 1] so tanh does not saturate on
        // integer-encoded sequences.
        let max_abs = x
            .iter()
            .flat_map(|row| row.iter())
            .fold(0.0_f64, |acc, &v| acc.max(v.abs()));
        self.input_scale = 1.0 / max_abs.max(1.0);
        self.n_features = width;

        self.layers = Vec::with_capacity(units.len());
        let mut input_dim = 1;
        for &u in &units {
            self.layers.push(LayerWeights::glorot(input_dim, u, &mut rng));
            input_dim = u;
        }
        let top = units[units.len() - 1];
        let limit = (6.0 / (top + 1) as f64).sqrt();
        self.readout_w = (0..top).map(|_| rng.gen_range(-limit..limit)).collect();
        self.readout_b = 0.0;

        let mut adam: Vec<AdamState> = self
            .layers
            .iter()
            .map(|l| AdamState {
                m: l.zeros_like(),
                v: l.zeros_like(),
            })
            .collect();
        let mut readout_m = vec![0.0; top];
        let mut readout_v = vec![0.0; top];
        let mut readout_bm = 0.0;
        let mut readout_bv = 0.0;

        let keep = (1.0 - self.config.dropout).max(1e-3);
        let batch_size = self.config.batch_size.max(1).min(x.len());
        let mut order: Vec<usize> = (0..x.len()).collect();
        let mut step = 0;

        for _ in 0..self.config.epochs {
            order.shuffle(&mut rng);
            for batch in order.chunks(batch_size) {
                let mut grads: Vec<LayerWeights> =
                    self.layers.iter().map(|l| l.zeros_like()).collect();
                let mut grad_readout_w = vec![0.0; top];
                let mut grad_readout_b = 0.0;

                // One inverted-dropout mask per layer gap, shared across the
                // batch and across timesteps.
                let masks: Vec<Vec<f64>> = units[..units.len() - 1]
                    .iter()
                    .map(|&u| {
                        (0..u)
                            .map(|_| {
                                if rng.gen_range(0.0..1.0) < keep {
                                    1.0 / keep
                                } else {
                                    0.0
                                }
                            })
                            .collect()
                    })
                    .collect();

                for &idx in batch {
                    let (traces, output) = self.forward(&x[idx], Some(&masks));
                    // d(MSE)/d(output) for one sample of the batch.
                    let d_output = 2.0 * (output - y[idx]) / batch.len() as f64;
                    self.backward(
                        &traces,
                        &masks,
                        d_output,
                        &mut grads,
                        &mut grad_readout_w,
                        &mut grad_readout_b,
                    );
                }

                step += 1;
                let lr = self.config.learning_rate;
                for ((layer, grad), state) in
                    self.layers.iter_mut().zip(grads.iter()).zip(adam.iter_mut())
                {
                    Self::adam_update(layer, grad, state, lr, step);
                }
                let correct1 = 1.0 - ADAM_BETA1.powi(step);
                let correct2 = 1.0 - ADAM_BETA2.powi(step);
                for u in 0..top {
                    readout_m[u] = ADAM_BETA1 * readout_m[u] + (1.0 - ADAM_BETA1) * grad_readout_w[u];
                    readout_v[u] =
                        ADAM_BETA2 * readout_v[u] + (1.0 - ADAM_BETA2) * grad_readout_w[u].powi(2);
                    self.readout_w[u] -= lr * (readout_m[u] / correct1)
                        / ((readout_v[u] / correct2).sqrt() + ADAM_EPS);
                }
                readout_bm = ADAM_BETA1 * readout_bm + (1.0 - ADAM_BETA1) * grad_readout_b;
                readout_bv = ADAM_BETA2 * readout_bv + (1.0 - ADAM_BETA2) * grad_readout_b.powi(2);
                self.readout_b -=
                    lr * (readout_bm / correct1) / ((readout_bv / correct2).sqrt() + ADAM_EPS);
            }
        }

        if self
            .layers
            .iter()
            .any(|l| l.b.iter().any(|v| !v.is_finite()))
        {
            return Err(ModelError::NumericalError(
                "training diverged to non-finite weights".to_string(),
            ));
        }

        self.fitted = true;
        Ok(())
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }
        validate_predict(x, self.n_features)?;
        Ok(x.iter().map(|row| self.forward(row, None).1).collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

impl TunableRegressor for RecurrentRegressor {
    fn set_param(&mut self, name: &str, value: &ParamValue) -> Result<()> {
        let invalid = |reason: &str| ModelError::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        };
        match name {
            "batch_size" => {
                let b = value.as_usize().ok_or_else(|| invalid("expected a positive integer"))?;
                if b == 0 {
                    return Err(invalid("must be positive"));
                }
                self.config.batch_size = b;
            }
            "epochs" => {
                let e = value.as_usize().ok_or_else(|| invalid("expected a positive integer"))?;
                if e == 0 {
                    return Err(invalid("must be positive"));
                }
                self.config.epochs = e;
            }
            "learning_rate" => {
                let lr = value.as_f64().ok_or_else(|| invalid("expected a number"))?;
                if lr <= 0.0 {
                    return Err(invalid("must be positive"));
                }
                self.config.learning_rate = lr;
            }
            "dropout" => {
                let d = value.as_f64().ok_or_else(|| invalid("expected a number"))?;
                if !(0.0..1.0).contains(&d) {
                    return Err(invalid("must be in [0, 1)"));
                }
                self.config.dropout = d;
            }
            _ => return Err(invalid("unknown parameter")),
        }
        Ok(())
    }
}

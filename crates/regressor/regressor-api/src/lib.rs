//! Regressor Consumer API
//!
//! Configuration types and DTOs for regressor consumers.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use regressor_spi::{EstimatorKind, ModelError, ParamValue, Regressor, Result, TunableRegressor};

/// Configuration for the recurrent-network regressor
///
/// Mirrors the training knobs of the original sequence model. `layer_units`
/// is optional: leaving it unset selects three hidden layers of 64 units,
/// and the default vector is constructed freshly on every call so no
/// configuration ever shares it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurrentConfig {
    /// Hidden units per stacked layer; `None` selects the default topology
    pub layer_units: Option<Vec<usize>>,
    /// Dropout probability applied between stacked layers during training
    pub dropout: f64,
    /// Adam learning rate
    pub learning_rate: f64,
    /// Mini-batch size
    pub batch_size: usize,
    /// Training epochs
    pub epochs: usize,
}

impl Default for RecurrentConfig {
    fn default() -> Self {
        Self {
            layer_units: None,
            dropout: 0.5,
            learning_rate: 0.00025,
            batch_size: 10,
            epochs: 50,
        }
    }
}

impl RecurrentConfig {
    /// Resolve the layer topology, constructing a fresh default when unset.
    pub fn resolved_layer_units(&self) -> Vec<usize> {
        self.layer_units.clone().unwrap_or_else(|| vec![64, 64, 64])
    }

    /// Set the hidden layer topology.
    pub fn layer_units(mut self, units: Vec<usize>) -> Self {
        self.layer_units = Some(units);
        self
    }

    /// Set the dropout probability.
    pub fn dropout(mut self, dropout: f64) -> Self {
        self.dropout = dropout.clamp(0.0, 0.95);
        self
    }

    /// Set the Adam learning rate.
    pub fn learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr.max(1e-8);
        self
    }

    /// Set the mini-batch size.
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Set the number of training epochs.
    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs.max(1);
        self
    }
}

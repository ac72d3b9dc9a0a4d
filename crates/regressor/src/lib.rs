//! # regressor
//!
//! Regression estimators for sequence-trait modeling: linear least squares,
//! decision trees and tree ensembles, gradient boosting, kernel SVR, and a
//! stacked recurrent network, all behind a common fit/predict contract.

pub use regressor_facade::*;

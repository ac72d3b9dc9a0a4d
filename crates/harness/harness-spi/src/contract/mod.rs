//! Contract traits for the evaluation harness.

mod estimator_factory;

pub use estimator_factory::EstimatorFactory;

//! Model types for the regressor family.

mod estimator_kind;
mod param_value;

pub use estimator_kind::EstimatorKind;
pub use param_value::ParamValue;

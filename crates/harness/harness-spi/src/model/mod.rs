//! Model types for the evaluation harness.

mod comparison_row;
mod holdout_trace;
mod param_grid;
mod search_record;

pub use comparison_row::ComparisonRow;
pub use holdout_trace::HoldoutTrace;
pub use param_grid::{ParamGrid, ParamSet};
pub use search_record::{GridSearchReport, SearchRecord};

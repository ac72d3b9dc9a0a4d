//! Harness Core
//!
//! Implementations of the three evaluation protocols, data splitting,
//! scoring metrics, and report rendering.

mod comparison;
mod grid_search;
mod holdout;
pub mod metrics;
mod report;
pub mod validation;

pub use comparison::Comparison;
pub use grid_search::GridSearch;
pub use holdout::HoldoutEvaluation;
pub use report::{
    print_comparison, print_score, print_search_report, render_comparison, render_score,
    render_search_report,
};

// Re-export API types (which include SPI types)
pub use harness_api::{
    ComparisonConfig, ComparisonRow, EstimatorFactory, GridSearchConfig, GridSearchReport,
    HarnessError, HoldoutConfig, HoldoutTrace, ParamGrid, ParamSet, Result, SearchRecord,
};

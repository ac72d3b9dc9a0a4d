//! Model types for the dataset family.

mod trait_table;

pub use trait_table::{TraitRecord, TraitTable};

//! Model types for the encoding family.

mod aligned_data;

pub use aligned_data::AlignedData;

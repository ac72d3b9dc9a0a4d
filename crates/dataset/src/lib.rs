//! # dataset
//!
//! Loading of sequence-trait measurements from CSV, with configurable
//! column mapping and a snapshot writer.

pub use dataset_facade::*;

//! Per-language aggregation of salary estimates.

pub mod aggregate;

pub use aggregate::*;

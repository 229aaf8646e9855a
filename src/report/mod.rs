//! Terminal rendering of per-platform statistics.

pub mod format;

pub use format::*;

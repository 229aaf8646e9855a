//! Input/output helpers.
//!
//! - JSON report document and file export (`export`)

pub mod export;

pub use export::*;

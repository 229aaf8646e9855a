//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - normalized vacancy records (`Listing`)
//! - per-language results (`LanguageStats`, `StatsReport`)
//! - run configuration (`RunConfig`, `PlatformChoice`, `OutputFormat`)

pub mod types;

pub use types::*;

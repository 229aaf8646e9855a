//! `vacancy-stats` library crate.
//!
//! The binary is a thin wrapper around this library so that:
//!
//! - the pagination, estimation and aggregation logic is testable without a network
//! - job boards plug in behind one trait (`sources::JobBoard`)
//! - rendering stays separate from collection

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod salary;
pub mod sources;
pub mod stats;

//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - validates configuration and credentials (before any request)
//! - runs the collection pipeline
//! - prints tables or JSON and writes the optional export

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::{Credentials, run_config_from_args};
use crate::domain::OutputFormat;
use crate::error::AppError;
use crate::sources::BlockingTransport;

pub mod pipeline;

/// Entry point for the `vacancy-stats` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` must be loaded before clap reads `SUPERJOB_API_KEY`.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing();

    let config = run_config_from_args(&cli)?;
    let credentials = Credentials::resolve(cli.superjob_api_key.clone(), &config)?;
    let boards = pipeline::build_boards(&config, &credentials)?;
    let transport = BlockingTransport::new()?;

    tracing::info!(
        languages = config.languages.len(),
        platforms = boards.len(),
        "collecting vacancy statistics"
    );
    let reports = pipeline::run_collection(&boards, &transport, &config.languages);

    match config.format {
        OutputFormat::Table => print!("{}", crate::report::format_reports(&reports)),
        OutputFormat::Json => println!("{}", crate::io::report_json(&reports)?),
    }

    if let Some(path) = &config.export {
        crate::io::write_report_json(path, &reports)?;
        tracing::info!(path = %path.display(), "report exported");
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vacancy_stats=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

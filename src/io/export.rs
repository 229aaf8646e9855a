//! JSON export of the collected reports.
//!
//! The same document backs `--format json` (stdout) and `--export <file>`.
//! Language order inside each platform follows the configured order.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::PlatformReport;
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct ReportFile<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub generated_at: DateTime<Utc>,
    pub platforms: &'a [PlatformReport],
}

impl<'a> ReportFile<'a> {
    pub fn new(platforms: &'a [PlatformReport]) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            generated_at: Utc::now(),
            platforms,
        }
    }
}

pub fn report_json(reports: &[PlatformReport]) -> Result<String, AppError> {
    serde_json::to_string_pretty(&ReportFile::new(reports))
        .map_err(|e| AppError::runtime(format!("Failed to serialize report: {e}")))
}

/// Write the report document to `path`.
pub fn write_report_json(path: &Path, reports: &[PlatformReport]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::config(format!("Failed to create export file '{}': {e}", path.display()))
    })?;

    serde_json::to_writer_pretty(file, &ReportFile::new(reports))
        .map_err(|e| AppError::config(format!("Failed to write export JSON: {e}")))?;

    Ok(())
}

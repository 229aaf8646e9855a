//! Command-line parsing.
//!
//! Flags only; turning them into a validated `RunConfig` happens in `config`.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{OutputFormat, PlatformChoice};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "vacancy-stats",
    version,
    about = "Average programmer salaries per language on HeadHunter and SuperJob"
)]
pub struct Cli {
    /// Language to query (repeatable). Defaults to python, c, c#, c++, java, js, ruby, go, 1с.
    #[arg(short = 'l', long = "language", value_name = "LANG")]
    pub languages: Vec<String>,

    /// Which platforms to query.
    #[arg(short = 'p', long, value_enum, default_value_t = PlatformChoice::All)]
    pub platform: PlatformChoice,

    /// HeadHunter region id (`area`); 1 is Moscow.
    #[arg(long, default_value_t = 1)]
    pub hh_area: u32,

    /// SuperJob region id (`town`); 4 is Moscow.
    #[arg(long, default_value_t = 4)]
    pub superjob_town: u32,

    /// Vacancies per HeadHunter page.
    #[arg(long, default_value_t = 100)]
    pub hh_page_size: u32,

    /// Vacancies per SuperJob page.
    #[arg(long, default_value_t = 20)]
    pub superjob_page_size: u32,

    /// Minimum delay between HeadHunter page requests (milliseconds).
    #[arg(long, default_value_t = 100)]
    pub hh_delay_ms: u64,

    /// Minimum delay between SuperJob page requests (milliseconds).
    #[arg(long, default_value_t = 200)]
    pub superjob_delay_ms: u64,

    /// SuperJob application key.
    #[arg(long, env = "SUPERJOB_API_KEY", hide_env_values = true)]
    pub superjob_api_key: Option<String>,

    /// Output format for stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Also write the reports to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

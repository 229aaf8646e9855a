//! Run configuration: CLI flags to `RunConfig`, plus the SuperJob credential.

use std::time::Duration;

use crate::cli::Cli;
use crate::domain::{BoardSettings, DEFAULT_LANGUAGES, Platform, RunConfig};
use crate::error::AppError;

pub const SUPERJOB_API_KEY_ENV: &str = "SUPERJOB_API_KEY";

/// SuperJob application key. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(raw: impl Into<String>) -> Result<Self, AppError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(missing_key());
        }
        Ok(Self(raw))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Credentials resolved at startup, before any request is made.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub superjob: Option<ApiKey>,
}

impl Credentials {
    /// Validate the raw key against the selected platforms.
    ///
    /// A missing or empty key is only fatal when SuperJob will be queried.
    pub fn resolve(raw_superjob_key: Option<String>, config: &RunConfig) -> Result<Self, AppError> {
        if !config.platforms.includes(Platform::SuperJob) {
            return Ok(Self::default());
        }
        let key = raw_superjob_key.ok_or_else(missing_key)?;
        Ok(Self {
            superjob: Some(ApiKey::new(key)?),
        })
    }
}

fn missing_key() -> AppError {
    AppError::config(format!(
        "{SUPERJOB_API_KEY_ENV} not found in environment (.env) or --superjob-api-key."
    ))
}

pub fn run_config_from_args(cli: &Cli) -> Result<RunConfig, AppError> {
    let languages: Vec<String> = if cli.languages.is_empty() {
        DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect()
    } else {
        cli.languages.iter().map(|s| s.trim().to_string()).collect()
    };
    if languages.iter().any(|l| l.is_empty()) {
        return Err(AppError::config("Language names must not be empty."));
    }
    if cli.hh_page_size == 0 || cli.superjob_page_size == 0 {
        return Err(AppError::config("Page size must be > 0."));
    }

    Ok(RunConfig {
        languages,
        platforms: cli.platform,
        headhunter: BoardSettings {
            region: cli.hh_area,
            page_size: cli.hh_page_size,
            page_delay: Duration::from_millis(cli.hh_delay_ms),
        },
        superjob: BoardSettings {
            region: cli.superjob_town,
            page_size: cli.superjob_page_size,
            page_delay: Duration::from_millis(cli.superjob_delay_ms),
        },
        format: cli.format,
        export: cli.export.clone(),
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::domain::{OutputFormat, PlatformChoice};

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["vacancy-stats"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn defaults_match_original_run() {
        let config = run_config_from_args(&parse(&[])).unwrap();
        assert_eq!(config.languages.len(), DEFAULT_LANGUAGES.len());
        assert_eq!(config.languages[0], "python");
        assert_eq!(config.platforms, PlatformChoice::All);
        assert_eq!(config.headhunter.region, 1);
        assert_eq!(config.headhunter.page_size, 100);
        assert_eq!(config.headhunter.page_delay, Duration::from_millis(100));
        assert_eq!(config.superjob.region, 4);
        assert_eq!(config.superjob.page_size, 20);
        assert_eq!(config.superjob.page_delay, Duration::from_millis(200));
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn explicit_languages_keep_order() {
        let config = run_config_from_args(&parse(&["-l", "Rust", "-l", "go"])).unwrap();
        assert_eq!(config.languages, vec!["Rust", "go"]);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = run_config_from_args(&parse(&["--hh-page-size", "0"])).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_CONFIG);
    }

    #[test]
    fn missing_key_is_fatal_when_superjob_selected() {
        let config = run_config_from_args(&parse(&[])).unwrap();
        let err = Credentials::resolve(None, &config).unwrap_err();
        assert!(err.message().contains(SUPERJOB_API_KEY_ENV));

        let err = Credentials::resolve(Some(String::new()), &config).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_CONFIG);
    }

    #[test]
    fn key_not_needed_for_headhunter_only() {
        let config = run_config_from_args(&parse(&["--platform", "hh"])).unwrap();
        let creds = Credentials::resolve(None, &config).unwrap();
        assert!(creds.superjob.is_none());
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("secret").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
    }
}

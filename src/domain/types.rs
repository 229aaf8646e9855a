//! Shared domain types.
//!
//! Everything here is transient: built once per run and dropped after the
//! report has been printed.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Languages queried when none are given on the command line.
pub const DEFAULT_LANGUAGES: [&str; 9] = ["python", "c", "c#", "c++", "java", "js", "ruby", "go", "1с"];

/// A single vacancy, normalized from whatever shape the platform returns.
///
/// Only the salary-related fields survive normalization. A HeadHunter item with
/// `"salary": null` becomes a listing with every field absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub currency: Option<String>,
    pub salary_from: Option<f64>,
    pub salary_to: Option<f64>,
}

impl Listing {
    pub fn new(currency: Option<&str>, salary_from: Option<f64>, salary_to: Option<f64>) -> Self {
        Self {
            currency: currency.map(str::to_string),
            salary_from,
            salary_to,
        }
    }
}

/// Aggregated numbers for one language on one platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LanguageStats {
    /// Total match count as reported by the platform (not what we managed to fetch).
    pub vacancies_found: u64,
    /// Listings that produced a salary estimate.
    pub vacancies_processed: u64,
    /// Truncated mean of the estimates, `0` when nothing was processed.
    pub average_salary: u64,
}

/// Ordered mapping `language -> LanguageStats`.
///
/// Keys are stored lower-cased. Iteration follows insertion order, which is the
/// configured language order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsReport {
    entries: Vec<(String, LanguageStats)>,
}

impl StatsReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert stats under the lower-cased language name.
    ///
    /// Re-inserting a language replaces its stats and keeps its original position.
    pub fn insert(&mut self, language: &str, stats: LanguageStats) {
        let key = language.to_lowercase();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = stats,
            None => self.entries.push((key, stats)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageStats> {
        let key = language.to_lowercase();
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, s)| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStats)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for StatsReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (language, stats) in &self.entries {
            map.serialize_entry(language, stats)?;
        }
        map.end()
    }
}

/// A supported job board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    HeadHunter,
    SuperJob,
}

impl Platform {
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::HeadHunter => "HeadHunter",
            Platform::SuperJob => "SuperJob",
        }
    }
}

/// Which platforms to query (`--platform`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformChoice {
    Hh,
    Superjob,
    All,
}

impl PlatformChoice {
    /// Selected platforms, in report order.
    pub fn platforms(self) -> Vec<Platform> {
        match self {
            PlatformChoice::Hh => vec![Platform::HeadHunter],
            PlatformChoice::Superjob => vec![Platform::SuperJob],
            PlatformChoice::All => vec![Platform::HeadHunter, Platform::SuperJob],
        }
    }

    pub fn includes(self, platform: Platform) -> bool {
        self.platforms().contains(&platform)
    }
}

/// How the reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Per-platform query knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSettings {
    /// Region discriminator (`area` on HeadHunter, `town` on SuperJob).
    pub region: u32,
    pub page_size: u32,
    /// Minimum interval between two page requests for the same language.
    pub page_delay: Duration,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults). The SuperJob credential is
/// kept apart, see `config::Credentials`.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub languages: Vec<String>,
    pub platforms: PlatformChoice,
    pub headhunter: BoardSettings,
    pub superjob: BoardSettings,
    pub format: OutputFormat,
    pub export: Option<PathBuf>,
}

/// Statistics for one platform, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformReport {
    pub platform: Platform,
    pub title: String,
    pub languages: StatsReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(found: u64) -> LanguageStats {
        LanguageStats {
            vacancies_found: found,
            vacancies_processed: 0,
            average_salary: 0,
        }
    }

    #[test]
    fn report_keeps_insertion_order_and_lowercases() {
        let mut report = StatsReport::new();
        report.insert("Python", stats(1));
        report.insert("C#", stats(2));
        report.insert("Go", stats(3));

        let keys: Vec<&str> = report.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["python", "c#", "go"]);
        assert_eq!(report.get("PYTHON").unwrap().vacancies_found, 1);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut report = StatsReport::new();
        report.insert("java", stats(1));
        report.insert("ruby", stats(2));
        report.insert("Java", stats(10));

        assert_eq!(report.len(), 2);
        let first = report.iter().next().unwrap();
        assert_eq!(first.0, "java");
        assert_eq!(first.1.vacancies_found, 10);
    }

    #[test]
    fn report_serializes_as_ordered_map() {
        let mut report = StatsReport::new();
        report.insert("ruby", stats(5));
        report.insert("c++", stats(7));

        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"ruby":{"vacancies_found":5,"vacancies_processed":0,"average_salary":0},"c++":{"vacancies_found":7,"vacancies_processed":0,"average_salary":0}}"#
        );
    }

    #[test]
    fn platform_choice_order() {
        assert_eq!(
            PlatformChoice::All.platforms(),
            vec![Platform::HeadHunter, Platform::SuperJob]
        );
        assert!(!PlatformChoice::Hh.includes(Platform::SuperJob));
    }
}

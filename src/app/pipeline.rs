//! The collection pipeline shared by table and JSON output:
//! boards -> fetch all pages per language -> estimate -> aggregate -> report.

use crate::config::Credentials;
use crate::domain::{Platform, PlatformReport, RunConfig, StatsReport};
use crate::error::AppError;
use crate::sources::{HeadHunter, JobBoard, SuperJob, Transport, fetch_all};
use crate::stats::aggregate;

/// Construct the selected boards in report order.
///
/// Fails if a selected board lacks its credential. This runs before any request.
pub fn build_boards(
    config: &RunConfig,
    credentials: &Credentials,
) -> Result<Vec<Box<dyn JobBoard>>, AppError> {
    let mut boards: Vec<Box<dyn JobBoard>> = Vec::new();
    for platform in config.platforms.platforms() {
        match platform {
            Platform::HeadHunter => {
                boards.push(Box::new(HeadHunter::new(config.headhunter.clone())));
            }
            Platform::SuperJob => {
                let key = credentials.superjob.clone().ok_or_else(|| {
                    AppError::config("SuperJob selected but no API key was configured.")
                })?;
                boards.push(Box::new(SuperJob::new(key, config.superjob.clone())));
            }
        }
    }
    Ok(boards)
}

/// Collect stats for every language on one board.
pub fn collect_report(
    board: &dyn JobBoard,
    transport: &dyn Transport,
    languages: &[String],
) -> StatsReport {
    let estimator = board.estimator();
    let mut report = StatsReport::new();

    for language in languages {
        let fetched = fetch_all(board, transport, language);
        let stats = aggregate(fetched.found, &fetched.listings, |l| estimator.estimate(l));

        tracing::info!(
            platform = board.name(),
            language = language.as_str(),
            found = stats.vacancies_found,
            processed = stats.vacancies_processed,
            average = stats.average_salary,
            pages = fetched.pages_fetched,
            complete = fetched.failure.is_none(),
            "language done"
        );

        report.insert(language, stats);
    }

    report
}

/// Run every board over every language. Reports stay separate per platform.
pub fn run_collection(
    boards: &[Box<dyn JobBoard>],
    transport: &dyn Transport,
    languages: &[String],
) -> Vec<PlatformReport> {
    boards
        .iter()
        .map(|board| PlatformReport {
            platform: board.platform(),
            title: board.title(),
            languages: collect_report(board.as_ref(), transport, languages),
        })
        .collect()
}

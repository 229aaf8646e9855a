//! Reduce a language's listings into `LanguageStats`.

use crate::domain::{LanguageStats, Listing};

/// Aggregate listings for one language.
///
/// `found` is the platform's reported total and is passed through untouched.
/// Listings for which `estimate` returns `None` are skipped silently.
pub fn aggregate<F>(found: u64, listings: &[Listing], estimate: F) -> LanguageStats
where
    F: Fn(&Listing) -> Option<f64>,
{
    let mut processed: u64 = 0;
    let mut total = 0.0;
    for listing in listings {
        if let Some(salary) = estimate(listing) {
            processed += 1;
            total += salary;
        }
    }

    LanguageStats {
        vacancies_found: found,
        vacancies_processed: processed,
        average_salary: average(total, processed),
    }
}

/// Truncated mean; `0` for an empty sample.
fn average(total: f64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    (total / count as f64).trunc() as u64
}

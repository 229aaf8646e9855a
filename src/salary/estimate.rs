//! Salary estimate heuristic.
//!
//! Listings often publish only a floor ("from 150 000") or only a ceiling
//! ("up to 200 000"). We map them onto a single expected value:
//!
//! ```text
//! from & to  -> (from + to) / 2
//! from only  -> from * 1.2
//! to only    -> to * 0.8
//! neither    -> no estimate
//! ```
//!
//! A bound of exactly zero counts as "not given": job boards use `0` as the
//! "unspecified" marker (SuperJob does this for `payment_from`).

use crate::domain::Listing;

/// Multiplier applied when only the lower bound is known.
pub const FLOOR_ONLY_FACTOR: f64 = 1.2;
/// Multiplier applied when only the upper bound is known.
pub const CEILING_ONLY_FACTOR: f64 = 0.8;

/// Estimate a salary from optional bounds.
pub fn predict_salary(salary_from: Option<f64>, salary_to: Option<f64>) -> Option<f64> {
    match (given(salary_from), given(salary_to)) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * FLOOR_ONLY_FACTOR),
        (None, Some(to)) => Some(to * CEILING_ONLY_FACTOR),
        (None, None) => None,
    }
}

fn given(bound: Option<f64>) -> Option<f64> {
    bound.filter(|v| *v != 0.0 && v.is_finite())
}

/// Platform-bound estimator: rejects listings outside the target currency
/// before applying [`predict_salary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryEstimator {
    currency: String,
}

impl SalaryEstimator {
    pub fn for_currency(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn estimate(&self, listing: &Listing) -> Option<f64> {
        if listing.currency.as_deref() != Some(self.currency.as_str()) {
            return None;
        }
        predict_salary(listing.salary_from, listing.salary_to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn both_bounds_give_midpoint() {
        let v = predict_salary(Some(100_000.0), Some(150_000.0)).unwrap();
        assert!(close(v, 125_000.0), "got {v}");
    }

    #[test]
    fn single_bound_is_scaled() {
        assert!(close(predict_salary(Some(100_000.0), None).unwrap(), 120_000.0));
        assert!(close(predict_salary(None, Some(80_000.0)).unwrap(), 64_000.0));
    }

    #[test]
    fn no_bounds_no_estimate() {
        assert_eq!(predict_salary(None, None), None);
        assert_eq!(predict_salary(Some(0.0), Some(0.0)), None);
    }

    #[test]
    fn zero_floor_counts_as_missing() {
        let v = predict_salary(Some(0.0), Some(80_000.0)).unwrap();
        assert!(close(v, 64_000.0), "got {v}");
    }

    #[test]
    fn estimator_rejects_foreign_currency() {
        let rub = SalaryEstimator::for_currency("RUR");
        let usd = Listing::new(Some("USD"), Some(3_000.0), Some(5_000.0));
        let none = Listing::new(None, Some(3_000.0), Some(5_000.0));
        assert_eq!(rub.estimate(&usd), None);
        assert_eq!(rub.estimate(&none), None);
    }

    #[test]
    fn estimator_currency_is_case_sensitive() {
        let sj = SalaryEstimator::for_currency("rub");
        let upper = Listing::new(Some("RUB"), Some(100_000.0), None);
        let lower = Listing::new(Some("rub"), Some(100_000.0), None);
        assert_eq!(sj.estimate(&upper), None);
        assert!(close(sj.estimate(&lower).unwrap(), 120_000.0));
    }
}

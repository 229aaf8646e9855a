//! HeadHunter (hh.ru) vacancy search.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::{BoardSettings, Listing, Platform};
use crate::salary::SalaryEstimator;
use crate::sources::{FetchError, JobBoard, SearchPage};

const BASE_URL: &str = "https://api.hh.ru/vacancies";
const CURRENCY: &str = "RUR";
const SEARCH_PREFIX: &str = "программист";

pub struct HeadHunter {
    settings: BoardSettings,
}

impl HeadHunter {
    pub fn new(settings: BoardSettings) -> Self {
        Self { settings }
    }
}

impl JobBoard for HeadHunter {
    fn platform(&self) -> Platform {
        Platform::HeadHunter
    }

    fn title(&self) -> String {
        format!("{} {}", self.name(), area_name(self.settings.region))
    }

    fn endpoint(&self) -> &str {
        BASE_URL
    }

    fn query(&self, language: &str, page: u32) -> Vec<(String, String)> {
        vec![
            ("text".to_string(), format!("{SEARCH_PREFIX} {language}")),
            ("area".to_string(), self.settings.region.to_string()),
            ("per_page".to_string(), self.settings.page_size.to_string()),
            ("page".to_string(), page.to_string()),
        ]
    }

    fn parse_page(&self, body: &str) -> Result<SearchPage, FetchError> {
        let page: VacanciesPage = serde_json::from_str(body)?;
        Ok(SearchPage {
            listings: page.items.into_iter().map(Vacancy::into_listing).collect(),
            found: Some(page.found),
            total_pages: Some(page.pages),
            more: None,
        })
    }

    fn estimator(&self) -> SalaryEstimator {
        SalaryEstimator::for_currency(CURRENCY)
    }

    fn page_delay(&self) -> Duration {
        self.settings.page_delay
    }
}

/// Human label for the most common `area` ids.
fn area_name(area: u32) -> String {
    match area {
        1 => "Moscow".to_string(),
        2 => "Saint Petersburg".to_string(),
        113 => "Russia".to_string(),
        other => format!("(area {other})"),
    }
}

#[derive(Debug, Deserialize)]
struct VacanciesPage {
    #[serde(default)]
    found: u64,
    #[serde(default)]
    pages: u32,
    #[serde(default)]
    items: Vec<Vacancy>,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    #[serde(default)]
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

impl Vacancy {
    fn into_listing(self) -> Listing {
        match self.salary {
            Some(s) => Listing {
                currency: s.currency,
                salary_from: s.from,
                salary_to: s.to,
            },
            None => Listing::default(),
        }
    }
}

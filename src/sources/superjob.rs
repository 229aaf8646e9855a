//! SuperJob vacancy search. Requires an application key.

use std::time::Duration;

use serde::Deserialize;

use crate::config::ApiKey;
use crate::domain::{BoardSettings, Listing, Platform};
use crate::salary::SalaryEstimator;
use crate::sources::{FetchError, JobBoard, SearchPage};

const BASE_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
const CURRENCY: &str = "rub";
const API_KEY_HEADER: &str = "X-Api-App-Id";

pub struct SuperJob {
    api_key: ApiKey,
    settings: BoardSettings,
}

impl SuperJob {
    pub fn new(api_key: ApiKey, settings: BoardSettings) -> Self {
        Self { api_key, settings }
    }
}

impl JobBoard for SuperJob {
    fn platform(&self) -> Platform {
        Platform::SuperJob
    }

    fn title(&self) -> String {
        format!("{} {}", self.name(), town_name(self.settings.region))
    }

    fn endpoint(&self) -> &str {
        BASE_URL
    }

    fn query(&self, language: &str, page: u32) -> Vec<(String, String)> {
        vec![
            ("keyword".to_string(), language.to_string()),
            ("town".to_string(), self.settings.region.to_string()),
            ("count".to_string(), self.settings.page_size.to_string()),
            ("page".to_string(), page.to_string()),
        ]
    }

    fn headers(&self) -> Vec<(String, String)> {
        vec![(API_KEY_HEADER.to_string(), self.api_key.expose().to_string())]
    }

    fn parse_page(&self, body: &str) -> Result<SearchPage, FetchError> {
        let page: VacanciesPage = serde_json::from_str(body)?;
        Ok(SearchPage {
            listings: page.objects.into_iter().map(Vacancy::into_listing).collect(),
            found: Some(page.total),
            total_pages: None,
            more: Some(page.more),
        })
    }

    fn estimator(&self) -> SalaryEstimator {
        SalaryEstimator::for_currency(CURRENCY)
    }

    fn page_delay(&self) -> Duration {
        self.settings.page_delay
    }
}

fn town_name(town: u32) -> String {
    match town {
        4 => "Moscow".to_string(),
        14 => "Saint Petersburg".to_string(),
        other => format!("(town {other})"),
    }
}

#[derive(Debug, Deserialize)]
struct VacanciesPage {
    #[serde(default)]
    total: u64,
    #[serde(default)]
    objects: Vec<Vacancy>,
    #[serde(default)]
    more: bool,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    payment_from: Option<f64>,
    payment_to: Option<f64>,
    currency: Option<String>,
}

impl Vacancy {
    fn into_listing(self) -> Listing {
        Listing {
            currency: self.currency,
            salary_from: self.payment_from,
            salary_to: self.payment_to,
        }
    }
}

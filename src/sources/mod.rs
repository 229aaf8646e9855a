//! Job board adapters and the shared pagination loop.
//!
//! Each platform implements [`JobBoard`]: how to build a page request, how to
//! decode a page, which currency counts. [`fetch_all`] drives any board through
//! its result pages.

use std::time::Duration;

use crate::domain::{Listing, Platform};
use crate::salary::SalaryEstimator;

pub mod headhunter;
pub mod http;
pub mod pacing;
pub mod superjob;
#[cfg(test)]
pub(crate) mod testing;

pub use headhunter::HeadHunter;
pub use http::{BlockingTransport, HttpResponse, PageRequest, Transport};
pub use pacing::Pacer;
pub use superjob::SuperJob;

/// A failed page request. Contained per language; never aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("status {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One decoded result page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub listings: Vec<Listing>,
    /// Platform-reported total match count.
    pub found: Option<u64>,
    /// Total number of pages, for boards that report it.
    pub total_pages: Option<u32>,
    /// Continuation flag, for boards that report it.
    pub more: Option<bool>,
}

pub trait JobBoard {
    fn platform(&self) -> Platform;

    fn name(&self) -> &'static str {
        self.platform().display_name()
    }

    /// Table title, e.g. "HeadHunter Moscow".
    fn title(&self) -> String;

    fn endpoint(&self) -> &str;

    /// Query parameters for `page` (zero-based) of a search for `language`.
    fn query(&self, language: &str, page: u32) -> Vec<(String, String)>;

    fn headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn parse_page(&self, body: &str) -> Result<SearchPage, FetchError>;

    fn estimator(&self) -> SalaryEstimator;

    fn page_delay(&self) -> Duration;
}

/// Everything collected for one language.
#[derive(Debug, Default)]
pub struct Fetched {
    pub listings: Vec<Listing>,
    /// Total reported by the first page; `0` if that page failed.
    pub found: u64,
    pub pages_fetched: u32,
    /// The error that stopped pagination early, if any.
    pub failure: Option<FetchError>,
}

/// Fetch every result page for `language`.
///
/// Stops when the page count reported by page 0 is exhausted, a page says there
/// is nothing more, a page comes back empty, or a request fails. On failure the
/// listings gathered so far are kept.
pub fn fetch_all(board: &dyn JobBoard, transport: &dyn Transport, language: &str) -> Fetched {
    let mut fetched = Fetched::default();
    let mut pacer = Pacer::new(board.page_delay());
    let mut total_pages: Option<u32> = None;
    let mut page: u32 = 0;

    loop {
        pacer.wait();
        let search_page = match fetch_page(board, transport, language, page) {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(
                    platform = board.name(),
                    language,
                    page,
                    "{}: request for {language} failed: {e}",
                    board.name()
                );
                fetched.failure = Some(e);
                break;
            }
        };
        fetched.pages_fetched += 1;

        if page == 0 {
            fetched.found = search_page.found.unwrap_or(0);
            total_pages = search_page.total_pages;
        }

        tracing::debug!(
            platform = board.name(),
            language,
            page,
            listings = search_page.listings.len(),
            "fetched page"
        );

        if search_page.listings.is_empty() {
            break;
        }
        fetched.listings.extend(search_page.listings);

        if search_page.more == Some(false) {
            break;
        }
        if let Some(total) = total_pages
            && page + 1 >= total
        {
            break;
        }
        page += 1;
    }

    fetched
}

fn fetch_page(
    board: &dyn JobBoard,
    transport: &dyn Transport,
    language: &str,
    page: u32,
) -> Result<SearchPage, FetchError> {
    let request = PageRequest {
        url: board.endpoint().to_string(),
        query: board.query(language, page),
        headers: board.headers(),
    };

    let response = transport.get(&request)?;
    if !response.is_success() {
        return Err(FetchError::Status(response.status));
    }

    board.parse_page(&response.body)
}

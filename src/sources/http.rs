//! Blocking HTTP transport.
//!
//! Boards never touch `reqwest` directly: they describe a `PageRequest` and the
//! pagination loop hands it to a `Transport`. Tests swap in a scripted
//! transport; the binary uses `BlockingTransport`.

use reqwest::blocking::Client;

use crate::error::AppError;
use crate::sources::FetchError;

/// HeadHunter rejects requests without a descriptive User-Agent.
const USER_AGENT: &str = concat!("vacancy-stats/", env!("CARGO_PKG_VERSION"));

/// A single GET request for one result page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl PageRequest {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status code and raw body of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport {
    /// Perform the request. Only transport-level failures are errors; any HTTP
    /// status is returned as a response.
    fn get(&self, request: &PageRequest) -> Result<HttpResponse, FetchError>;
}

pub struct BlockingTransport {
    client: Client,
}

impl BlockingTransport {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::runtime(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl Transport for BlockingTransport {
    fn get(&self, request: &PageRequest) -> Result<HttpResponse, FetchError> {
        let mut req = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        let resp = req.send().map_err(|e| FetchError::Request(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| FetchError::Request(format!("failed to read body: {e}")))?;

        Ok(HttpResponse { status, body })
    }
}

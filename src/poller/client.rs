//! HTTP client for the suggestion backend

use std::time::Duration;

use thiserror::Error;

use crate::suggestions::{SuggestionItem, decode_body};

/// Errors from a single fetch attempt
///
/// The poller treats every variant the same way (fall back to the
/// built-in list); the split exists for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure or timeout
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a status other than 200
    #[error("Backend returned status {code}")]
    Status { code: u16 },

    /// Body was not the expected JSON shape
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Build the blocking HTTP client shared by every poll cycle
///
/// The timeout covers the whole request, so with default settings a
/// cycle can never outlive the poll interval.
pub fn build_client(timeout: Duration) -> Result<reqwest::blocking::Client, FetchError> {
    reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FetchError::Network(e.to_string()))
}

/// Fetch and decode one round of suggestions
pub fn fetch_suggestions(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<Vec<SuggestionItem>, FetchError> {
    let response = client
        .get(url)
        .send()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if status.as_u16() != 200 {
        return Err(FetchError::Status {
            code: status.as_u16(),
        });
    }

    let body = response
        .text()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    decode_body(&body).map_err(|e| FetchError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;

//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester:
//! - Building the shared HTTP client with the configured user agent and timeout
//! - GET requests for listing and product pages
//! - Error classification (timeout, non-2xx status, transport failure)
//!
//! There is no retry: a failed request is reported once and the caller
//! decides whether to skip the product or stop the crawl.

use crate::config::HttpConfig;
use crate::ShelfError;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP configuration (user agent, timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use sumi_shelf::config::HttpConfig;
/// use sumi_shelf::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body
///
/// # Error Classification
///
/// | Condition | Error |
/// |-----------|-------|
/// | Request exceeded the timeout | `ShelfError::Timeout` |
/// | Response status not 2xx | `ShelfError::Status` |
/// | Connection, TLS, body decode failure | `ShelfError::Http` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, ShelfError> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ShelfError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| classify_error(url, e))
}

fn classify_error(url: &str, error: reqwest::Error) -> ShelfError {
    if error.is_timeout() {
        ShelfError::Timeout {
            url: url.to_string(),
        }
    } else {
        ShelfError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}

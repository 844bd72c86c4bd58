//! HTTP document fetcher for clipgrab
//!
//! Fetches video pages with a browser User-Agent. One request per call:
//! no retries, no rate limiting.

use std::time::Duration;

use crate::error::{ClipgrabError, Result};

pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for outbound page and metadata requests
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Builds the shared reqwest client for a configuration
pub(crate) fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(ClipgrabError::HttpError)
}

/// Turns a non-2xx response into `HttpStatus`
pub(crate) fn ensure_success(response: reqwest::Response, url: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), url, "upstream returned error status");
        return Err(ClipgrabError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response)
}

/// Fetches raw page markup
pub struct PageClient {
    client: reqwest::Client,
}

impl PageClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client(&config)?,
        })
    }

    /// Fetch the HTML of a page
    ///
    /// # Errors
    /// - `HttpError` - transport failure or undecodable body
    /// - `HttpStatus` - any non-2xx status
    pub async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ClipgrabError::HttpError)?;

        ensure_success(response, url)?
            .text()
            .await
            .map_err(ClipgrabError::HttpError)
    }
}

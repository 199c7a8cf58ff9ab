//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the benchmark:
//! - Building HTTP clients with the configured user agent and timeouts
//! - GET requests returning the page body as text
//! - Error classification into `TransportError`
//!
//! There is no retry logic; a failed request makes the page unusable.

use crate::config::HttpConfig;
use crate::TransportError;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP session configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use catalogue_bench::config::HttpConfig;
/// use catalogue_bench::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// A fetch session owned by one worker
///
/// The underlying client keeps its connection pool for the lifetime of the
/// fetcher, so every request a worker makes reuses the same connections.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    /// Creates a new fetch session from configuration
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(
            build_http_client(config)?,
            Duration::from_secs(config.request_timeout_secs),
        ))
    }

    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches a URL and returns the response body
    ///
    /// # Error Classification
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | Request exceeded the timeout | `TransportError::Timeout` |
    /// | Connection refused / DNS / TLS | `TransportError::Connect` |
    /// | Non-2xx status | `TransportError::Status` |
    /// | Body could not be read | `TransportError::Body` |
    /// | Anything else | `TransportError::Http` |
    pub async fn fetch(&self, url: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout {
                    url: url.to_string(),
                }
            } else {
                TransportError::Body {
                    url: url.to_string(),
                    source: e,
                }
            }
        })
    }
}

fn classify_error(url: &str, error: reqwest::Error) -> TransportError {
    let url = url.to_string();
    if error.is_timeout() {
        TransportError::Timeout { url }
    } else if error.is_connect() {
        TransportError::Connect { url }
    } else {
        TransportError::Http { url, source: error }
    }
}

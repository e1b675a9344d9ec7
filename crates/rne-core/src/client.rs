//! HTTP client with rate limiting for RTVE.es
//!
//! This module provides a rate-limited HTTP client for fetching the
//! schedule fragments and the programme detail pages. Requests are spaced
//! out to avoid hammering the server; failures are fatal to the caller
//! (there is no retry logic, a broken fetch aborts the whole run).

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::error::{Result, RneError};

/// Base URL for RTVE.es, used to resolve relative links
pub const RTVE_BASE_URL: &str = "http://www.rtve.es";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept-Language header for Spanish content
const DEFAULT_ACCEPT_LANGUAGE: &str = "es-ES,es;q=0.9,en;q=0.8";

/// Rate limiter to control request frequency
///
/// Ensures that requests are spaced at least `min_interval` apart. A run
/// issues one request per programme detail page, so the limiter bounds the
/// total request rate of the whole batch.
pub struct RateLimiter {
    /// Minimum interval between requests
    min_interval: Duration,
    /// Timestamp of the last request
    last_request: Arc<Mutex<Instant>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the specified requests per second
    pub fn new(requests_per_second: f64) -> Self {
        let min_interval = Duration::from_secs_f64(1.0 / requests_per_second);
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(Instant::now() - min_interval)),
        }
    }

    /// Acquire permission to make a request
    ///
    /// This method will wait if necessary to ensure the minimum interval
    /// between requests is respected.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();

        if elapsed < self.min_interval {
            let wait_time = self.min_interval - elapsed;
            sleep(wait_time).await;
        }

        *last = Instant::now();
    }

    /// Get the minimum interval between requests
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// Configuration for the RTVE HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site origin used both for fetching and for resolving relative links
    /// (default: `RTVE_BASE_URL`)
    pub base_url: String,
    /// Maximum requests per second (default: 2.0)
    pub requests_per_second: f64,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: RTVE_BASE_URL.to_string(),
            requests_per_second: 2.0,
            timeout_secs: 30,
        }
    }
}

/// HTTP client for RTVE.es with rate limiting
pub struct RneClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Rate limiter for request throttling
    rate_limiter: RateLimiter,
    /// Site origin requests are resolved against
    base_url: String,
}

impl RneClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT_LANGUAGE,
                    reqwest::header::HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
                );
                headers
            })
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let rate_limiter = RateLimiter::new(config.requests_per_second);

        Ok(Self {
            client,
            rate_limiter,
            base_url: config.base_url,
        })
    }

    /// The site origin this client fetches from
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a page as HTML text.
    ///
    /// `target` may be an absolute `http(s)://` URL (programme detail pages
    /// carry absolute links) or a site-relative path starting with `/`,
    /// which is joined onto the configured base URL.
    ///
    /// # Errors
    /// - `RneError::InvalidUrl` if `target` is neither absolute nor rooted
    /// - `RneError::Http` on transport failures or non-success status codes
    pub async fn fetch(&self, target: &str) -> Result<String> {
        let url = if target.starts_with("http://") || target.starts_with("https://") {
            target.to_string()
        } else if target.starts_with('/') {
            format!("{}{}", self.base_url, target)
        } else {
            return Err(RneError::InvalidUrl(target.to_string()));
        };

        self.rate_limiter.acquire().await;

        let response = self.client.get(&url).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

//! Configuration types for the Krisinformation client.

use std::env;
use std::time::Duration;

use crate::error::FeedError;

/// Default base URL of the Krisinformation API.
pub const DEFAULT_BASE_URL: &str = "https://api.krisinformation.se/v3";

/// Default HTTP timeout for a single feed request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for connecting to the Krisinformation feed.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL of the API (e.g., "https://api.krisinformation.se/v3").
    pub base_url: String,
    /// Query the test endpoint instead of the live one.
    pub test_mode: bool,
    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl FeedConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            test_mode: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Optional (with defaults):
    /// - `KRISINFORMATION_API_URL` - Default: https://api.krisinformation.se/v3
    /// - `KRISINFORMATION_TEST_MODE` - Default: false
    /// - `KRISINFORMATION_TIMEOUT_SECS` - Default: 30
    pub fn from_env() -> Result<Self, FeedError> {
        let base_url =
            env::var("KRISINFORMATION_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let test_mode = match env::var("KRISINFORMATION_TEST_MODE") {
            Ok(val) => parse_bool(&val).ok_or_else(|| {
                FeedError::Config(format!("Invalid KRISINFORMATION_TEST_MODE: {}", val))
            })?,
            Err(_) => false,
        };

        let timeout_secs = env::var("KRISINFORMATION_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT.as_secs().to_string())
            .parse::<u64>()
            .map_err(|e| FeedError::Config(format!("Invalid KRISINFORMATION_TIMEOUT_SECS: {}", e)))?;

        Ok(Self::new(base_url)
            .with_test_mode(test_mode)
            .with_timeout(Duration::from_secs(timeout_secs)))
    }

    /// Builder method to toggle the test endpoint.
    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the alert-listing endpoint URL for the configured mode.
    pub fn vmas_url(&self) -> String {
        self.endpoint_url(self.test_mode)
    }

    /// Get the alert-listing endpoint URL for an explicit mode.
    pub fn endpoint_url(&self, is_test: bool) -> String {
        if is_test {
            format!("{}/testvmas", self.base_url)
        } else {
            format!("{}/vmas", self.base_url)
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

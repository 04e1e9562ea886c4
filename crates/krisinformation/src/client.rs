//! Krisinformation HTTP client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::feed::AlertFeed;
use crate::types::AlertRecord;

/// Client for the Krisinformation alert feed, bound to one county and language.
#[derive(Clone)]
pub struct CrisisAlerter {
    http: Client,
    config: FeedConfig,
    county: String,
    language: String,
}

impl CrisisAlerter {
    /// Create a client for the given county and language with default settings.
    pub fn new(county: impl Into<String>, language: impl Into<String>) -> Result<Self, FeedError> {
        Self::with_config(county, language, FeedConfig::default())
    }

    /// Create a client with an explicit feed configuration.
    pub fn with_config(
        county: impl Into<String>,
        language: impl Into<String>,
        config: FeedConfig,
    ) -> Result<Self, FeedError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("krisinformation-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FeedError::Http)?;

        Ok(Self {
            http,
            config,
            county: county.into(),
            language: language.into(),
        })
    }

    /// Fetch active alerts from either the live or the test endpoint,
    /// regardless of the configured mode.
    pub async fn fetch(&self, is_test: bool) -> Result<Vec<AlertRecord>, FeedError> {
        self.get_alerts(&self.config.endpoint_url(is_test)).await
    }

    async fn get_alerts(&self, url: &str) -> Result<Vec<AlertRecord>, FeedError> {
        debug!(url = %url, language = %self.language, "Fetching alerts");

        let response = self
            .http
            .get(url)
            .query(&[("language", self.language.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let records: Vec<AlertRecord> = serde_json::from_str(&body)?;
        debug!(count = records.len(), "Fetched alerts");
        Ok(records)
    }

    /// Get the configuration.
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }
}

#[async_trait]
impl AlertFeed for CrisisAlerter {
    async fn vmas(&self) -> Result<Vec<AlertRecord>, FeedError> {
        self.get_alerts(&self.config.vmas_url()).await
    }

    fn county(&self) -> &str {
        &self.county
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn name(&self) -> &str {
        "CrisisAlerter"
    }
}

impl std::fmt::Debug for CrisisAlerter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrisisAlerter")
            .field("config", &self.config)
            .field("county", &self.county)
            .field("language", &self.language)
            .finish()
    }
}

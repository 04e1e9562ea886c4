//! Failing feed implementation - every call errors.

use krisinformation::{async_trait, AlertFeed, AlertRecord, FeedError};

/// A feed whose every call fails with [`FeedError::Unavailable`].
#[derive(Debug, Clone)]
pub struct FailingFeed {
    county: String,
    language: String,
    reason: String,
}

impl FailingFeed {
    pub fn new(county: impl Into<String>, language: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            county: county.into(),
            language: language.into(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl AlertFeed for FailingFeed {
    async fn vmas(&self) -> Result<Vec<AlertRecord>, FeedError> {
        Err(FeedError::Unavailable(self.reason.clone()))
    }

    fn county(&self) -> &str {
        &self.county
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn name(&self) -> &str {
        "FailingFeed"
    }
}

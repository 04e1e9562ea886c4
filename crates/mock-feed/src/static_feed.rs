//! Static feed implementation - serves a replaceable record list.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use krisinformation::{async_trait, AlertFeed, AlertRecord, FeedError};
use tokio::sync::Mutex;

/// A feed that returns whatever records it currently holds.
///
/// Clones share the same records and call counter, so a test can keep one
/// handle while the sensor owns another and swap the feed contents between
/// polls.
#[derive(Debug, Clone)]
pub struct StaticFeed {
    county: String,
    language: String,
    records: Arc<Mutex<Vec<AlertRecord>>>,
    failure: Arc<Mutex<Option<String>>>,
    calls: Arc<AtomicUsize>,
}

impl StaticFeed {
    /// Create an empty feed bound to a county and language.
    pub fn new(county: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            county: county.into(),
            language: language.into(),
            records: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Builder method to seed the initial records.
    pub fn with_records(self, records: Vec<AlertRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            ..self
        }
    }

    /// Replace the records returned by subsequent calls.
    pub async fn set_records(&self, records: Vec<AlertRecord>) {
        *self.records.lock().await = records;
    }

    /// Make subsequent calls fail (`Some`) or succeed again (`None`).
    pub async fn set_failure(&self, reason: Option<String>) {
        *self.failure.lock().await = reason;
    }

    /// Number of times `vmas` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AlertFeed for StaticFeed {
    async fn vmas(&self) -> Result<Vec<AlertRecord>, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(reason) = self.failure.lock().await.clone() {
            return Err(FeedError::Unavailable(reason));
        }
        Ok(self.records.lock().await.clone())
    }

    fn county(&self) -> &str {
        &self.county
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn name(&self) -> &str {
        "StaticFeed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_mock_event;

    #[tokio::test]
    async fn test_static_feed_returns_records() {
        let feed = StaticFeed::new("Värmlands län", "sv")
            .with_records(vec![generate_mock_event("Test-VMA-1337-1", "Test VMA 1")]);

        let records = feed.vmas().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(feed.calls(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let feed = StaticFeed::new("Värmlands län", "sv");
        let handle = feed.clone();

        handle
            .set_records(vec![
                generate_mock_event("Test-VMA-1337-1", "Test VMA 1"),
                generate_mock_event("Test-VMA-1337-2", "Test VMA 2"),
            ])
            .await;

        assert_eq!(feed.vmas().await.unwrap().len(), 2);
        assert_eq!(handle.calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_toggle() {
        let feed = StaticFeed::new("Värmlands län", "en");

        feed.set_failure(Some("timeout".to_string())).await;
        assert!(matches!(feed.vmas().await, Err(FeedError::Unavailable(_))));

        feed.set_failure(None).await;
        assert!(feed.vmas().await.unwrap().is_empty());
        assert_eq!(feed.calls(), 2);
    }

    #[test]
    fn test_binding() {
        let feed = StaticFeed::new("Värmlands län", "sv");
        assert_eq!(feed.county(), "Värmlands län");
        assert_eq!(feed.language(), "sv");
        assert_eq!(feed.name(), "StaticFeed");
    }
}

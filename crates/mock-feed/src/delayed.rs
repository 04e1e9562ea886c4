//! Delayed feed implementation - wraps another feed with artificial delay.

use std::time::Duration;

use krisinformation::{async_trait, AlertFeed, AlertRecord, FeedError};
use tokio::time::sleep;

/// A feed that wraps another feed and adds artificial delay.
///
/// Useful for simulating a slow upstream without touching the network.
pub struct DelayedFeed<F: AlertFeed> {
    inner: F,
    delay: Duration,
}

impl<F: AlertFeed> DelayedFeed<F> {
    /// Create a new DelayedFeed wrapping the given feed with the specified delay.
    pub fn new(inner: F, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a feed with a delay in seconds.
    pub fn with_secs(inner: F, secs: u64) -> Self {
        Self::new(inner, Duration::from_secs(secs))
    }
}

#[async_trait]
impl<F: AlertFeed> AlertFeed for DelayedFeed<F> {
    async fn vmas(&self) -> Result<Vec<AlertRecord>, FeedError> {
        sleep(self.delay).await;
        self.inner.vmas().await
    }

    fn county(&self) -> &str {
        self.inner.county()
    }

    fn language(&self) -> &str {
        self.inner.language()
    }

    fn name(&self) -> &str {
        "DelayedFeed"
    }
}

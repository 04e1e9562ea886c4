//! The `AlertFeed` trait definition.

use async_trait::async_trait;

use crate::error::FeedError;
use crate::types::AlertRecord;

/// A source of currently active crisis alerts.
///
/// Implementations can range from the live HTTP client to in-memory mocks.
/// This trait is object-safe and can be used with `Arc<dyn AlertFeed>`.
#[async_trait]
pub trait AlertFeed: Send + Sync {
    /// List the alerts that are active right now, in feed order.
    async fn vmas(&self) -> Result<Vec<AlertRecord>, FeedError>;

    /// The county this feed is bound to.
    fn county(&self) -> &str;

    /// The ISO language code this feed is bound to (e.g., "sv").
    fn language(&self) -> &str;

    /// Get a human-readable name for this feed implementation.
    fn name(&self) -> &str {
        "AlertFeed"
    }
}

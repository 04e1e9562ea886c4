//! Mock alert feeds for exercising the Krisinformation sensor.
//!
//! This crate provides in-memory implementations of the `AlertFeed` trait:
//! - `StaticFeed` - Returns a replaceable list of records (or a set failure)
//! - `FailingFeed` - Always fails with the given message
//! - `DelayedFeed` - Wraps another feed with artificial latency
//!
//! # Example
//!
//! ```rust
//! use mock_feed::{generate_mock_event, AlertFeed, StaticFeed};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_feed::FeedError> {
//!     let feed = StaticFeed::new("Värmlands län", "sv")
//!         .with_records(vec![generate_mock_event("Test-VMA-1337-1", "Test VMA 1")]);
//!
//!     let alerts = feed.vmas().await?;
//!     assert_eq!(alerts[0].push_message, "Test VMA 1");
//!     Ok(())
//! }
//! ```

mod delayed;
mod event;
mod failing;
mod static_feed;

// Re-export feed types for convenience
pub use krisinformation::{async_trait, AlertArea, AlertFeed, AlertRecord, FeedError};

pub use delayed::DelayedFeed;
pub use event::{generate_mock_event, mock_event_in, MOCK_COUNTY, MOCK_PUBLISHED, MOCK_WEB};
pub use failing::FailingFeed;
pub use static_feed::StaticFeed;

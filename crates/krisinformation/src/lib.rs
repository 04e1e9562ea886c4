//! Krisinformation feed client library.
//!
//! This crate provides a Rust client for the Swedish Krisinformation
//! crisis-alert feed ("Viktigt meddelande till allmänheten", VMA). It supports:
//!
//! - Listing the currently active alerts from the live or test endpoint
//! - A typed alert model with the feed's PascalCase field names mapped
//! - The [`AlertFeed`] trait, so consumers can swap in mock feeds
//!
//! # Example
//!
//! ```no_run
//! use krisinformation::{AlertFeed, CrisisAlerter};
//!
//! # async fn example() -> Result<(), krisinformation::FeedError> {
//! let alerter = CrisisAlerter::new("Värmlands län", "sv")?;
//!
//! for alert in alerter.vmas().await? {
//!     println!("{:?}: {}", alert.primary_region(), alert.push_message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod types;

pub use client::CrisisAlerter;
pub use config::FeedConfig;
pub use error::FeedError;
pub use feed::AlertFeed;
pub use types::{AlertArea, AlertRecord};

// Re-export async_trait for implementors of AlertFeed
pub use async_trait::async_trait;

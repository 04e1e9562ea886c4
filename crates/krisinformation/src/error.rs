//! Error types for the Krisinformation client.

use thiserror::Error;

/// Errors that can occur when fetching alerts from the feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not a valid alert list.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The feed answered with a non-success status code.
    #[error("feed returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The feed is unavailable for some other reason.
    #[error("feed unavailable: {0}")]
    Unavailable(String),
}

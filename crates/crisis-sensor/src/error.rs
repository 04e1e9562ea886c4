//! Error types for the crisis sensor.

use krisinformation::FeedError;
use thiserror::Error;

/// Errors that can occur when configuring or refreshing the sensor.
#[derive(Debug, Error)]
pub enum SensorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing required environment variable
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The feed call failed.
    #[error("fetch failed: {0}")]
    Feed(#[from] FeedError),

    /// The worker running the feed call panicked or was cancelled.
    #[error("fetch worker failed: {0}")]
    Worker(String),
}

//! Run a single crisis sensor and log every state it publishes.
//!
//! Required environment variables:
//! - KRISINFORMATION_COUNTY - County to watch, e.g. "Värmlands län"
//!
//! Run with:
//! ```bash
//! KRISINFORMATION_COUNTY="Värmlands län" cargo run -p crisis-sensor --bin krisinformation-sensor
//! ```

use std::sync::Arc;

use crisis_sensor::{AlertSensor, SensorConfig, StartupGate};
use krisinformation::{CrisisAlerter, FeedConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "krisinformation=info,crisis_sensor=info,krisinformation_sensor=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = SensorConfig::from_env()?;
    let feed_config = FeedConfig::from_env()?;
    info!(
        name = %config.name,
        county = %config.county,
        language = %config.language,
        "Loaded configuration"
    );

    let alerter = CrisisAlerter::with_config(&config.county, &config.language, feed_config)?;
    info!(
        endpoint = %alerter.config().vmas_url(),
        test_mode = alerter.config().test_mode,
        "Feed client ready"
    );

    let sensor = AlertSensor::with_config(Arc::new(alerter), &config);
    info!(poll_interval = ?sensor.poll_interval(), "Sensor configured");

    let gate = StartupGate::new();
    let handle = sensor.activate(&gate);

    let mut updates = handle.subscribe();
    let reporter = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            match serde_json::to_string(&state) {
                Ok(json) => info!(state = %json, "Sensor state updated"),
                Err(e) => error!("Failed to serialize sensor state: {}", e),
            }
        }
    });

    let mut locations = handle.subscribe_locations();
    let location_reporter = tokio::spawn(async move {
        while locations.changed().await.is_ok() {
            let events = locations.borrow_and_update().clone();
            match serde_json::to_string(&events) {
                Ok(json) => info!(count = events.len(), locations = %json, "Geo-locations updated"),
                Err(e) => error!("Failed to serialize geo-locations: {}", e),
            }
        }
    });

    // Everything is wired up; let the sensor run its first refresh.
    gate.mark_started();

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    handle.shutdown().await;
    reporter.abort();
    location_reporter.abort();
    Ok(())
}

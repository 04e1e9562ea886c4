//! Example: Run a sensor against an in-memory feed
//!
//! The feed starts empty, gains a Värmland alert and then fails, so the
//! sensor shows "Inga larm", the alert and finally "Unavailable". Uses a
//! 5 second poll interval instead of the usual 120.
//!
//! Run with:
//! ```bash
//! cargo run -p crisis-sensor --example mock_sensor
//! ```

use std::sync::Arc;
use std::time::Duration;

use crisis_sensor::{AlertSensor, SensorConfig, StartupGate};
use mock_feed::{generate_mock_event, StaticFeed};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("crisis_sensor=debug,mock_sensor=debug")
        .init();

    let config = SensorConfig::new("Värmlands län", "sv").with_poll_interval(Duration::from_secs(5));
    let feed = StaticFeed::new(&config.county, &config.language);

    let handle = AlertSensor::with_config(Arc::new(feed.clone()), &config).activate(&StartupGate::started());
    let mut updates = handle.subscribe();

    for step in 0..3 {
        if updates.changed().await.is_err() {
            break;
        }
        let state = updates.borrow_and_update().clone();
        println!(
            "{} = {:?} (link: {:?}, county: {:?})",
            state.name, state.value, state.attributes.link, state.attributes.county
        );

        match step {
            0 => feed.set_records(vec![generate_mock_event("Test-VMA-1337-1", "Test VMA 1")]).await,
            1 => feed.set_failure(Some("simulated outage".to_string())).await,
            _ => {}
        }
    }

    handle.shutdown().await;
}

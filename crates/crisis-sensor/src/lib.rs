//! # crisis-sensor
//!
//! Polls the Krisinformation crisis-alert feed for one county and exposes the
//! current alert (or "no alarm") as a single named value with link, publish
//! time and county attributes.
//!
//! ## Running a sensor
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use crisis_sensor::{AlertSensor, SensorConfig, StartupGate};
//! use krisinformation::{CrisisAlerter, FeedConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SensorConfig::from_env()?;
//!     let alerter = CrisisAlerter::with_config(&config.county, &config.language, FeedConfig::from_env()?)?;
//!
//!     let sensor = AlertSensor::with_config(Arc::new(alerter), &config);
//!     let handle = sensor.activate(&StartupGate::started());
//!
//!     let mut updates = handle.subscribe();
//!     while updates.changed().await.is_ok() {
//!         println!("{:?}", updates.borrow().value);
//!     }
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod geo;
mod selector;
mod sensor;
mod startup;
mod state;

pub use config::{language_from_locale, SensorConfig, DEFAULT_NAME, DEFAULT_POLL_INTERVAL};
pub use error::SensorError;
pub use geo::{
    parse_coordinate, GeoLocationEvent, GeoLocationSync, GeoLocationTracker, GEO_ICON, GEO_SOURCE,
    GEO_UNIT,
};
pub use selector::{
    no_alarm_text, select_alert, truncate_chars, DisplayState, MAX_STATE_CHARS, NO_ALARM_EN,
    NO_ALARM_SV, UNAVAILABLE,
};
pub use sensor::{AlertSensor, SensorHandle};
pub use startup::StartupGate;
pub use state::{SensorAttributes, SensorState, ATTRIBUTION, ICON};

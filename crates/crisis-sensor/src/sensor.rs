//! The alert poller.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use krisinformation::{AlertFeed, AlertRecord};
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::config::{SensorConfig, DEFAULT_NAME, DEFAULT_POLL_INTERVAL};
use crate::geo::{GeoLocationEvent, GeoLocationTracker};
use crate::selector::DisplayState;
use crate::startup::StartupGate;
use crate::state::SensorState;
use crate::SensorError;

/// Polls an [`AlertFeed`] and keeps the current display state for its county.
///
/// County and language are taken from the feed, so the sensor always filters
/// on what its client is bound to.
pub struct AlertSensor {
    feed: Arc<dyn AlertFeed>,
    poll_interval: Duration,
    display: Option<DisplayState>,
    state_tx: watch::Sender<SensorState>,
    locations: GeoLocationTracker,
    locations_tx: watch::Sender<Vec<GeoLocationEvent>>,
}

impl AlertSensor {
    /// Create a sensor with default name and poll interval.
    pub fn new(feed: Arc<dyn AlertFeed>) -> Self {
        let unique_id = SensorConfig::new(feed.county(), feed.language()).unique_id();
        Self::build(feed, DEFAULT_NAME.to_string(), unique_id, DEFAULT_POLL_INTERVAL)
    }

    /// Create a sensor using the name, id and interval from `config`.
    pub fn with_config(feed: Arc<dyn AlertFeed>, config: &SensorConfig) -> Self {
        Self::build(feed, config.name.clone(), config.unique_id(), config.poll_interval)
    }

    fn build(
        feed: Arc<dyn AlertFeed>,
        name: String,
        unique_id: String,
        poll_interval: Duration,
    ) -> Self {
        let (state_tx, _) = watch::channel(SensorState::pending(name, unique_id));
        let (locations_tx, _) = watch::channel(Vec::new());
        Self {
            feed,
            poll_interval,
            display: None,
            state_tx,
            locations: GeoLocationTracker::new(),
            locations_tx,
        }
    }

    /// The state computed by the last refresh, if any.
    pub fn display(&self) -> Option<&DisplayState> {
        self.display.as_ref()
    }

    /// Snapshot of the published state.
    pub fn state(&self) -> SensorState {
        self.state_tx.borrow().clone()
    }

    /// Receive every state published from now on.
    pub fn subscribe(&self) -> watch::Receiver<SensorState> {
        self.state_tx.subscribe()
    }

    /// One geo-location entity per active alert for the county, in feed order.
    pub fn locations(&self) -> Vec<GeoLocationEvent> {
        self.locations_tx.borrow().clone()
    }

    pub fn subscribe_locations(&self) -> watch::Receiver<Vec<GeoLocationEvent>> {
        self.locations_tx.subscribe()
    }

    /// Time between refreshes once the sensor is activated.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Fetch the alert list and recompute the display state.
    ///
    /// The fetch runs on its own task so a slow feed never stalls the caller's
    /// executor thread. A failed fetch sets the value to "Unavailable" and keeps
    /// link, published and county from the previous state; it never escapes.
    /// Geo-location entities follow every successful fetch and are left as
    /// they were when a fetch fails.
    pub async fn refresh(&mut self) -> &DisplayState {
        let county = self.feed.county().to_string();
        let language = self.feed.language().to_string();

        match self.fetch().await {
            Ok(alerts) => {
                let next = DisplayState::from_alerts(&alerts, &county, &language);
                let matched = next.is_alarm();
                debug!(
                    county = %county,
                    alerts = alerts.len(),
                    matched,
                    "Refreshed alerts"
                );
                self.display = Some(next);
                self.sync_locations(&alerts, &county);
            }
            Err(e) => {
                error!(county = %county, "Error fetching data: {}", e);
                let mut previous = self
                    .display
                    .take()
                    .unwrap_or_else(|| DisplayState::no_alarm(&language));
                previous.mark_unavailable();
                self.display = Some(previous);
            }
        }

        let current = self.display.get_or_insert_with(|| DisplayState::no_alarm(&language));
        let now = Utc::now();
        self.state_tx.send_modify(|state| state.apply(&*current, now));
        current
    }

    fn sync_locations(&mut self, alerts: &[AlertRecord], county: &str) {
        let sync = self.locations.sync(alerts, county);
        if sync.is_empty() {
            return;
        }

        for id in &sync.added {
            info!(county = %county, id = %id, "Adding geo-location entity");
        }
        for id in &sync.removed {
            info!(county = %county, id = %id, "Removing geo-location entity");
        }
        debug!(updated = sync.updated.len(), total = self.locations.len(), "Synced geo-locations");

        let events = self.locations.events();
        self.locations_tx.send_replace(events);
    }

    async fn fetch(&self) -> Result<Vec<AlertRecord>, SensorError> {
        let feed = Arc::clone(&self.feed);
        let worker = tokio::spawn(async move { feed.vmas().await });

        match worker.await {
            Ok(result) => result.map_err(SensorError::Feed),
            Err(e) => Err(SensorError::Worker(e.to_string())),
        }
    }

    /// Start polling on a background task.
    ///
    /// If the host behind `gate` has already started, the first refresh runs
    /// immediately; otherwise it waits for the startup notification. After
    /// that the sensor refreshes once per poll interval until the returned
    /// handle is cancelled or dropped.
    pub fn activate(self, gate: &StartupGate) -> SensorHandle {
        let state = self.subscribe();
        let locations = self.subscribe_locations();
        let startup = gate.on_started();
        let task = tokio::spawn(self.run(startup));
        SensorHandle {
            task,
            state,
            locations,
        }
    }

    async fn run(mut self, startup: Option<oneshot::Receiver<()>>) {
        if let Some(startup) = startup {
            info!(county = %self.feed.county(), "Deferring first refresh until startup completes");
            if startup.await.is_err() {
                warn!("Startup gate dropped before startup completed, sensor not started");
                return;
            }
        }

        info!(
            county = %self.feed.county(),
            feed = self.feed.name(),
            poll_interval = ?self.poll_interval,
            "Starting crisis sensor"
        );
        self.refresh().await;

        let mut ticker = interval_at(Instant::now() + self.poll_interval, self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.refresh().await;
        }
    }
}

/// Handle to an activated sensor. Dropping it stops the polling task.
pub struct SensorHandle {
    task: JoinHandle<()>,
    state: watch::Receiver<SensorState>,
    locations: watch::Receiver<Vec<GeoLocationEvent>>,
}

impl SensorHandle {
    /// Snapshot of the latest published state.
    pub fn state(&self) -> SensorState {
        self.state.borrow().clone()
    }

    /// A receiver that is notified on every refresh.
    pub fn subscribe(&self) -> watch::Receiver<SensorState> {
        self.state.clone()
    }

    /// Snapshot of the current geo-location entities.
    pub fn locations(&self) -> Vec<GeoLocationEvent> {
        self.locations.borrow().clone()
    }

    /// A receiver that is notified whenever the set of located alerts changes.
    pub fn subscribe_locations(&self) -> watch::Receiver<Vec<GeoLocationEvent>> {
        self.locations.clone()
    }

    /// Stop the polling task. An in-flight fetch is abandoned.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Whether the polling task has stopped (cancelled, or never started
    /// because its startup gate was dropped).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancel and wait for the polling task to wind down.
    pub async fn shutdown(mut self) {
        self.task.abort();
        let _ = (&mut self.task).await;
        info!("Crisis sensor stopped");
    }
}

impl Drop for SensorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

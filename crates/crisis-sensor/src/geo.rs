//! Per-alert geo-location entities.
//!
//! Besides the single county sensor, every active alert for the county is
//! exposed as its own located entity. The tracker keeps one entity per alert,
//! in feed order, and reports which entities appeared, changed or went away
//! on each sync.

use indexmap::IndexMap;
use krisinformation::AlertRecord;
use serde::Serialize;

pub const GEO_SOURCE: &str = "krisinformation";
pub const GEO_ICON: &str = "mdi:public";
pub const GEO_UNIT: &str = "km";

/// One active alert placed on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLocationEvent {
    /// Stable id of the alert within the feed.
    pub external_id: String,
    /// Friendly name; the alert headline, or its push message if no headline.
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub county: Option<String>,
    pub link: String,
    pub published: String,
    pub source: &'static str,
    pub icon: &'static str,
    pub unit_of_measurement: &'static str,
}

impl GeoLocationEvent {
    /// Build the entity for one alert.
    pub fn from_alert(alert: &AlertRecord) -> Self {
        let primary = alert.area.first();
        let (latitude, longitude) = match primary
            .and_then(|area| area.coordinate.as_deref())
            .and_then(parse_coordinate)
        {
            Some((lat, lon)) => (Some(lat), Some(lon)),
            None => (None, None),
        };

        Self {
            external_id: external_id(alert),
            name: alert
                .headline
                .clone()
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| alert.push_message.clone()),
            latitude,
            longitude,
            county: primary.map(|area| area.description.clone()),
            link: alert.web.clone(),
            published: alert.published.clone(),
            source: GEO_SOURCE,
            icon: GEO_ICON,
            unit_of_measurement: GEO_UNIT,
        }
    }
}

/// Parse a feed coordinate such as `"9.11,57.7 0"` into `(latitude, longitude)`.
///
/// Only the first comma-separated pair of the first point is read; anything
/// after the first whitespace is ignored.
pub fn parse_coordinate(raw: &str) -> Option<(f64, f64)> {
    let point = raw.split_whitespace().next()?;
    let mut parts = point.split(',');
    let latitude = parts.next()?.trim().parse::<f64>().ok()?;
    let longitude = parts.next()?.trim().parse::<f64>().ok()?;

    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    Some((latitude, longitude))
}

/// Identifier used to track an alert across polls.
fn external_id(alert: &AlertRecord) -> String {
    match alert.identifier.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => id.to_string(),
        None => format!("{}|{}", alert.published, alert.push_message),
    }
}

/// What changed during one sync.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoLocationSync {
    pub added: Vec<String>,
    pub updated: Vec<String>,
    pub removed: Vec<String>,
}

impl GeoLocationSync {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

/// The set of geo-location entities for one county.
#[derive(Debug, Clone, Default)]
pub struct GeoLocationTracker {
    entities: IndexMap<String, GeoLocationEvent>,
}

impl GeoLocationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tracked entities with the alerts for `county`.
    ///
    /// Alerts whose primary region differs from `county` are skipped. When
    /// the feed repeats an id, the first occurrence wins.
    pub fn sync(&mut self, alerts: &[AlertRecord], county: &str) -> GeoLocationSync {
        let mut next: IndexMap<String, GeoLocationEvent> = IndexMap::new();
        for alert in alerts.iter().filter(|a| a.primary_region() == Some(county)) {
            let event = GeoLocationEvent::from_alert(alert);
            next.entry(event.external_id.clone()).or_insert(event);
        }

        let mut sync = GeoLocationSync::default();
        for (id, event) in &next {
            match self.entities.get(id) {
                None => sync.added.push(id.clone()),
                Some(existing) if existing != event => sync.updated.push(id.clone()),
                Some(_) => {}
            }
        }
        sync.removed = self
            .entities
            .keys()
            .filter(|id| !next.contains_key(*id))
            .cloned()
            .collect();

        self.entities = next;
        sync
    }

    pub fn get(&self, external_id: &str) -> Option<&GeoLocationEvent> {
        self.entities.get(external_id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in feed order.
    pub fn events(&self) -> Vec<GeoLocationEvent> {
        self.entities.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krisinformation::AlertArea;

    const VARMLAND: &str = "Värmlands län";

    fn alert(id: &str, region: &str, headline: &str) -> AlertRecord {
        AlertRecord {
            identifier: Some(id.to_string()),
            push_message: headline.to_string(),
            headline: Some(headline.to_string()),
            web: "krisinformation.se".to_string(),
            published: "2023-03-29T11:02:11+02:00".to_string(),
            area: vec![AlertArea {
                kind: Some("County".to_string()),
                description: region.to_string(),
                coordinate: Some("9.11,57.7 0".to_string()),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("9.11,57.7 0"), Some((9.11, 57.7)));
        assert_eq!(parse_coordinate(" 13.5,59.4,0 14.1,60.0,0"), Some((13.5, 59.4)));
        assert_eq!(parse_coordinate("9.11"), None);
        assert_eq!(parse_coordinate("north,east"), None);
        assert_eq!(parse_coordinate(""), None);
        assert_eq!(parse_coordinate("NaN,1.0"), None);
    }

    #[test]
    fn test_event_from_alert() {
        let event = GeoLocationEvent::from_alert(&alert("Test-VMA-1337-1", VARMLAND, "Test VMA 1"));

        assert_eq!(event.external_id, "Test-VMA-1337-1");
        assert_eq!(event.name, "Test VMA 1");
        assert_eq!(event.latitude, Some(9.11));
        assert_eq!(event.longitude, Some(57.7));
        assert_eq!(event.county.as_deref(), Some(VARMLAND));
        assert_eq!(event.link, "krisinformation.se");
        assert_eq!(event.published, "2023-03-29T11:02:11+02:00");
        assert_eq!(event.source, "krisinformation");
        assert_eq!(event.icon, "mdi:public");
        assert_eq!(event.unit_of_measurement, "km");
    }

    #[test]
    fn test_event_without_coordinate_or_headline() {
        let mut record = alert("x", VARMLAND, "Meddelande");
        record.headline = None;
        record.area[0].coordinate = None;

        let event = GeoLocationEvent::from_alert(&record);
        assert_eq!(event.name, "Meddelande");
        assert!(event.latitude.is_none());
        assert!(event.longitude.is_none());
    }

    #[test]
    fn test_missing_identifier_falls_back() {
        let mut record = alert("", VARMLAND, "Test VMA 1");
        record.identifier = None;

        let event = GeoLocationEvent::from_alert(&record);
        assert_eq!(event.external_id, "2023-03-29T11:02:11+02:00|Test VMA 1");
    }

    #[test]
    fn test_sync_adds_updates_and_removes() {
        let mut tracker = GeoLocationTracker::new();

        let sync = tracker.sync(
            &[alert("1", VARMLAND, "Test VMA 1"), alert("2", VARMLAND, "Test VMA 2")],
            VARMLAND,
        );
        assert_eq!(sync.added, vec!["1", "2"]);
        assert_eq!(tracker.len(), 2);

        let sync = tracker.sync(
            &[alert("2", VARMLAND, "Test VMA 2 uppdaterad"), alert("3", VARMLAND, "Test VMA 3")],
            VARMLAND,
        );
        assert_eq!(sync.added, vec!["3"]);
        assert_eq!(sync.updated, vec!["2"]);
        assert_eq!(sync.removed, vec!["1"]);
        assert_eq!(tracker.get("2").unwrap().name, "Test VMA 2 uppdaterad");

        let sync = tracker.sync(
            &[alert("2", VARMLAND, "Test VMA 2 uppdaterad"), alert("3", VARMLAND, "Test VMA 3")],
            VARMLAND,
        );
        assert!(sync.is_empty());
    }

    #[test]
    fn test_sync_keeps_county_only_in_feed_order() {
        let mut tracker = GeoLocationTracker::new();
        tracker.sync(
            &[
                alert("b", VARMLAND, "Andra"),
                alert("s", "Stockholms län", "Stockholm"),
                alert("a", VARMLAND, "Första"),
                alert("b", VARMLAND, "Dubblett"),
            ],
            VARMLAND,
        );

        let names: Vec<String> = tracker.events().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Andra", "Första"]);
    }

    #[test]
    fn test_empty_feed_clears_tracker() {
        let mut tracker = GeoLocationTracker::new();
        tracker.sync(&[alert("1", VARMLAND, "Test VMA 1")], VARMLAND);

        let sync = tracker.sync(&[], VARMLAND);
        assert_eq!(sync.removed, vec!["1"]);
        assert!(tracker.is_empty());
    }
}

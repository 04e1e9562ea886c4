//! Outbound sensor state.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::selector::DisplayState;

pub const ATTRIBUTION: &str = "Alerts provided by Krisinformation";
pub const ICON: &str = "mdi:alert";

/// Attribute map published next to the sensor value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SensorAttributes {
    pub link: Option<String>,
    pub published: Option<String>,
    pub county: Option<String>,
}

/// The named value plus metadata that the sensor exposes to its host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorState {
    pub name: String,
    pub unique_id: String,
    /// `None` until the first refresh has completed.
    pub value: Option<String>,
    pub attributes: SensorAttributes,
    pub attribution: &'static str,
    pub icon: &'static str,
    pub updated_at: Option<DateTime<Utc>>,
}

impl SensorState {
    /// State of a sensor that has not refreshed yet.
    pub fn pending(name: impl Into<String>, unique_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unique_id: unique_id.into(),
            value: None,
            attributes: SensorAttributes::default(),
            attribution: ATTRIBUTION,
            icon: ICON,
            updated_at: None,
        }
    }

    /// Replace value and attributes from a display state.
    pub fn apply(&mut self, display: &DisplayState, at: DateTime<Utc>) {
        self.value = Some(display.value.clone());
        self.attributes = SensorAttributes {
            link: display.link.clone(),
            published: display.published.clone(),
            county: display.region.clone(),
        };
        self.updated_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pending_state() {
        let state = SensorState::pending("Krisinformation - Sweden", "krisinformation_x");
        assert!(state.value.is_none());
        assert_eq!(state.attributes, SensorAttributes::default());
        assert_eq!(state.icon, "mdi:alert");
    }

    #[test]
    fn test_apply_and_serialize() {
        let mut state = SensorState::pending("Krisinformation - Sweden", "krisinformation_x");
        let display = DisplayState {
            value: "Test VMA 1".to_string(),
            link: Some("krisinformation.se".to_string()),
            published: Some("2023-03-29T11:02:11+02:00".to_string()),
            region: Some("Värmlands län".to_string()),
        };
        let at = DateTime::parse_from_rfc3339("2023-03-29T09:05:00Z")
            .unwrap()
            .with_timezone(&Utc);

        state.apply(&display, at);

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["value"], json!("Test VMA 1"));
        assert_eq!(
            value["attributes"],
            json!({
                "link": "krisinformation.se",
                "published": "2023-03-29T11:02:11+02:00",
                "county": "Värmlands län",
            })
        );
        assert_eq!(value["attribution"], json!("Alerts provided by Krisinformation"));
        assert_eq!(value["updated_at"], json!("2023-03-29T09:05:00Z"));
    }
}

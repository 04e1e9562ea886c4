//! Alert record types as published by the Krisinformation feed.

use serde::{Deserialize, Serialize};

/// A single active alert (VMA) from the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlertRecord {
    /// Feed identifier (e.g., "Test-VMA-1337-1").
    #[serde(default)]
    pub identifier: Option<String>,

    /// Short message intended for push notifications.
    #[serde(default)]
    pub push_message: String,

    /// Headline shown in the feed.
    #[serde(default)]
    pub headline: Option<String>,

    /// Lead paragraph.
    #[serde(default)]
    pub preamble: Option<String>,

    /// Full body text.
    #[serde(default)]
    pub body_text: Option<String>,

    /// Link to the alert on the web.
    #[serde(default)]
    pub web: String,

    /// Publish time as given by the feed (RFC 3339 with offset).
    #[serde(default)]
    pub published: String,

    #[serde(default)]
    pub updated: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub sender_name: Option<String>,

    #[serde(default)]
    pub event: Option<String>,

    /// Areas the alert applies to. The first entry is the primary region.
    #[serde(default)]
    pub area: Vec<AlertArea>,
}

impl AlertRecord {
    /// The primary region description, if the record has any area.
    pub fn primary_region(&self) -> Option<&str> {
        self.area.first().map(|area| area.description.as_str())
    }
}

/// An administrative area referenced by an alert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlertArea {
    /// Area kind, e.g. "County".
    #[serde(default, rename = "Type")]
    pub kind: Option<String>,

    /// Human-readable name, e.g. "Värmlands län".
    #[serde(default)]
    pub description: String,

    /// Raw coordinate string, if the feed supplies one.
    #[serde(default)]
    pub coordinate: Option<String>,
}

impl AlertArea {
    /// Create an area with only a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            kind: None,
            description: description.into(),
            coordinate: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "Identifier": "Test-VMA-1337-1",
            "PushMessage": "Test VMA 1",
            "Headline": "Viktigt meddelande till allmänheten",
            "Web": "krisinformation.se",
            "Published": "2023-03-29T11:02:11+02:00",
            "Area": [
                {"Type": "County", "Description": "Värmlands län", "Coordinate": "13.5,59.5 0"},
                {"Type": "Municipality", "Description": "Karlstad"}
            ],
            "SomethingNew": 42
        }
    ]"#;

    #[test]
    fn test_deserialize_feed_payload() {
        let records: Vec<AlertRecord> = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.identifier.as_deref(), Some("Test-VMA-1337-1"));
        assert_eq!(record.push_message, "Test VMA 1");
        assert_eq!(record.web, "krisinformation.se");
        assert_eq!(record.published, "2023-03-29T11:02:11+02:00");
        assert_eq!(record.area.len(), 2);
        assert_eq!(record.area[0].kind.as_deref(), Some("County"));
        assert_eq!(record.primary_region(), Some("Värmlands län"));
    }

    #[test]
    fn test_missing_fields_default() {
        let record: AlertRecord = serde_json::from_str("{}").unwrap();
        assert!(record.push_message.is_empty());
        assert!(record.area.is_empty());
        assert_eq!(record.primary_region(), None);
    }
}

//! Canned alert records.

use krisinformation::{AlertArea, AlertRecord};

/// County used by [`generate_mock_event`].
pub const MOCK_COUNTY: &str = "Värmlands län";

/// Link used by mock records.
pub const MOCK_WEB: &str = "krisinformation.se";

/// Publish time used by mock records.
pub const MOCK_PUBLISHED: &str = "2023-03-29T11:02:11+02:00";

/// Build a Värmlands län alert whose push message is `headline`.
pub fn generate_mock_event(identifier: &str, headline: &str) -> AlertRecord {
    let mut record = mock_event_in(MOCK_COUNTY, headline);
    record.identifier = Some(identifier.to_string());
    record
}

/// Build an alert for an arbitrary region.
pub fn mock_event_in(region: &str, push_message: &str) -> AlertRecord {
    AlertRecord {
        push_message: push_message.to_string(),
        headline: Some(push_message.to_string()),
        web: MOCK_WEB.to_string(),
        published: MOCK_PUBLISHED.to_string(),
        language: Some("sv".to_string()),
        area: vec![AlertArea {
            kind: Some("County".to_string()),
            description: region.to_string(),
            coordinate: Some("9.11,57.7 0".to_string()),
        }],
        ..Default::default()
    }
}

//! Region-matched alert selection.

use krisinformation::AlertRecord;

/// Longest value the sensor will expose, in characters.
pub const MAX_STATE_CHARS: usize = 255;

/// Value shown when no alert applies and the language is Swedish.
pub const NO_ALARM_SV: &str = "Inga larm";

/// Value shown when no alert applies in any other language.
pub const NO_ALARM_EN: &str = "No alarms";

/// Value shown after a failed fetch.
pub const UNAVAILABLE: &str = "Unavailable";

/// What the sensor currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub value: String,
    pub link: Option<String>,
    pub published: Option<String>,
    pub region: Option<String>,
}

impl DisplayState {
    /// The no-alarm state for a language, with all metadata cleared.
    pub fn no_alarm(language: &str) -> Self {
        Self {
            value: no_alarm_text(language).to_string(),
            link: None,
            published: None,
            region: None,
        }
    }

    /// The state for a matched alert.
    pub fn from_alert(alert: &AlertRecord, region: &str) -> Self {
        Self {
            value: truncate_chars(&alert.push_message, MAX_STATE_CHARS),
            link: Some(alert.web.clone()),
            published: Some(alert.published.clone()),
            region: Some(region.to_string()),
        }
    }

    /// Compute the state for a freshly fetched alert list.
    pub fn from_alerts(alerts: &[AlertRecord], region: &str, language: &str) -> Self {
        match select_alert(alerts, region) {
            Some(alert) => Self::from_alert(alert, region),
            None => Self::no_alarm(language),
        }
    }

    /// Switch to the unavailable value; metadata keeps its last value.
    pub fn mark_unavailable(&mut self) {
        self.value = UNAVAILABLE.to_string();
    }

    pub fn is_alarm(&self) -> bool {
        self.region.is_some()
    }
}

/// Pick the first alert whose primary region equals `region` exactly.
pub fn select_alert<'a>(alerts: &'a [AlertRecord], region: &str) -> Option<&'a AlertRecord> {
    alerts
        .iter()
        .find(|alert| alert.primary_region() == Some(region))
}

/// Localized no-alarm text.
pub fn no_alarm_text(language: &str) -> &'static str {
    if language == "sv" {
        NO_ALARM_SV
    } else {
        NO_ALARM_EN
    }
}

/// Cut `text` to at most `max` characters without splitting a character.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

//! Configuration for the crisis sensor.

use std::env;
use std::time::Duration;

use crate::SensorError;

/// Display name used when none is configured.
pub const DEFAULT_NAME: &str = "Krisinformation - Sweden";

/// Time between refreshes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(120);

/// Language used when neither the override nor the locale yields one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Configuration for one crisis sensor.
#[derive(Debug, Clone)]
pub struct SensorConfig {
    /// Display name of the sensor.
    pub name: String,
    /// County whose alerts are shown (e.g., "Värmlands län").
    pub county: String,
    /// ISO language code ("sv" selects Swedish texts).
    pub language: String,
    /// Time between refreshes.
    pub poll_interval: Duration,
    unique_id: Option<String>,
}

impl SensorConfig {
    /// Create a new configuration for a county with defaults for everything else.
    pub fn new(county: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            county: county.into(),
            language: language.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            unique_id: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `KRISINFORMATION_COUNTY` - County to filter on
    ///
    /// Optional (with defaults):
    /// - `KRISINFORMATION_NAME` - Default: "Krisinformation - Sweden"
    /// - `KRISINFORMATION_LANGUAGE` - Default: language part of `LANG`, else "en"
    /// - `KRISINFORMATION_POLL_SECS` - Default: 120
    /// - `KRISINFORMATION_UNIQUE_ID` - Default: derived from the county
    pub fn from_env() -> Result<Self, SensorError> {
        let county = env::var("KRISINFORMATION_COUNTY")
            .map_err(|_| SensorError::MissingEnvVar("KRISINFORMATION_COUNTY".to_string()))?;
        if county.trim().is_empty() {
            return Err(SensorError::Config(
                "KRISINFORMATION_COUNTY must not be empty".to_string(),
            ));
        }

        let language = env::var("KRISINFORMATION_LANGUAGE")
            .ok()
            .filter(|lang| !lang.trim().is_empty())
            .or_else(|| env::var("LANG").ok().and_then(|lang| language_from_locale(&lang)))
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let name = env::var("KRISINFORMATION_NAME").unwrap_or_else(|_| DEFAULT_NAME.to_string());

        let poll_secs = env::var("KRISINFORMATION_POLL_SECS")
            .unwrap_or_else(|_| DEFAULT_POLL_INTERVAL.as_secs().to_string())
            .parse::<u64>()
            .map_err(|e| SensorError::Config(format!("Invalid KRISINFORMATION_POLL_SECS: {}", e)))?;
        if poll_secs == 0 {
            return Err(SensorError::Config(
                "KRISINFORMATION_POLL_SECS must be greater than zero".to_string(),
            ));
        }

        let mut config = Self::new(county, language)
            .with_name(name)
            .with_poll_interval(Duration::from_secs(poll_secs));
        if let Ok(unique_id) = env::var("KRISINFORMATION_UNIQUE_ID") {
            config = config.with_unique_id(unique_id);
        }
        Ok(config)
    }

    /// Builder method to set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder method to set the poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Builder method to set an explicit unique id.
    pub fn with_unique_id(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    /// Stable identifier of the sensor.
    pub fn unique_id(&self) -> String {
        match &self.unique_id {
            Some(id) => id.clone(),
            None => format!("krisinformation_{}", slugify(&self.county)),
        }
    }
}

/// Extract the language code from a POSIX locale such as `sv_SE.UTF-8`.
pub fn language_from_locale(locale: &str) -> Option<String> {
    let code: String = locale
        .split(['_', '.', '@', '-'])
        .next()?
        .trim()
        .to_lowercase();

    match code.as_str() {
        "" | "c" | "posix" => None,
        _ => Some(code),
    }
}

fn slugify(raw: &str) -> String {
    raw.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SensorConfig::new("Värmlands län", "sv");
        assert_eq!(config.name, "Krisinformation - Sweden");
        assert_eq!(config.poll_interval, Duration::from_secs(120));
        assert_eq!(config.unique_id(), "krisinformation_värmlands_län");
    }

    #[test]
    fn test_explicit_unique_id() {
        let config = SensorConfig::new("Stockholms län", "en").with_unique_id("entry-123");
        assert_eq!(config.unique_id(), "entry-123");
    }

    #[test]
    fn test_language_from_locale() {
        assert_eq!(language_from_locale("sv_SE.UTF-8"), Some("sv".to_string()));
        assert_eq!(language_from_locale("en-GB"), Some("en".to_string()));
        assert_eq!(language_from_locale("C.UTF-8"), None);
        assert_eq!(language_from_locale("POSIX"), None);
        assert_eq!(language_from_locale(""), None);
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_vars() {
            std::env::remove_var("KRISINFORMATION_COUNTY");
            std::env::remove_var("KRISINFORMATION_NAME");
            std::env::remove_var("KRISINFORMATION_LANGUAGE");
            std::env::remove_var("KRISINFORMATION_POLL_SECS");
            std::env::remove_var("KRISINFORMATION_UNIQUE_ID");
        }

        let saved_lang = std::env::var("LANG").ok();

        // Missing county
        clear_all_vars();
        match SensorConfig::from_env() {
            Err(SensorError::MissingEnvVar(var)) => assert_eq!(var, "KRISINFORMATION_COUNTY"),
            other => panic!("Expected MissingEnvVar, got {:?}", other),
        }

        // County only, language from locale
        clear_all_vars();
        std::env::set_var("KRISINFORMATION_COUNTY", "Värmlands län");
        std::env::set_var("LANG", "sv_SE.UTF-8");
        let config = SensorConfig::from_env().unwrap();
        assert_eq!(config.county, "Värmlands län");
        assert_eq!(config.language, "sv");
        assert_eq!(config.name, DEFAULT_NAME);
        assert_eq!(config.poll_interval, DEFAULT_POLL_INTERVAL);

        // Explicit overrides
        clear_all_vars();
        std::env::set_var("KRISINFORMATION_COUNTY", "Stockholms län");
        std::env::set_var("KRISINFORMATION_LANGUAGE", "en");
        std::env::set_var("KRISINFORMATION_NAME", "Kris");
        std::env::set_var("KRISINFORMATION_POLL_SECS", "30");
        std::env::set_var("KRISINFORMATION_UNIQUE_ID", "abc");
        let config = SensorConfig::from_env().unwrap();
        assert_eq!(config.language, "en");
        assert_eq!(config.name, "Kris");
        assert_eq!(config.poll_interval, Duration::from_secs(30));
        assert_eq!(config.unique_id(), "abc");

        // Zero interval rejected
        clear_all_vars();
        std::env::set_var("KRISINFORMATION_COUNTY", "Stockholms län");
        std::env::set_var("KRISINFORMATION_POLL_SECS", "0");
        assert!(matches!(SensorConfig::from_env(), Err(SensorError::Config(_))));

        // Cleanup
        clear_all_vars();
        match saved_lang {
            Some(lang) => std::env::set_var("LANG", lang),
            None => std::env::remove_var("LANG"),
        }
    }
}

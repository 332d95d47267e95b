//! Runtime configuration for the UI shell and its mock services.
//!
//! # Design
//! - Every field has a default so an empty override is valid.
//! - Overrides arrive as JSON and merge field-by-field over the defaults.
//! - Validation rejects values the mocks cannot honour.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Upper bound for the simulated latency.
pub const MAX_MOCK_LATENCY_MS: u64 = 60_000;

/// Local-storage key that may hold a JSON override for [`UiConfig`].
pub const CONFIG_OVERRIDE_KEY: &str = "atomic.config";

/// Error raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Override JSON did not parse.
    #[error("invalid configuration override")]
    Parse(#[from] serde_json::Error),
    /// A field held an unusable value.
    #[error("invalid configuration field")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// UI settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Brand shown in the navigation bar.
    pub app_title: String,
    /// Local-storage key holding the signed-in user.
    pub storage_key: String,
    /// Simulated backend latency in milliseconds.
    pub mock_latency_ms: u64,
    /// Identifier assigned to the mock user.
    pub mock_user_id: String,
    /// Display name assigned to the mock user.
    pub mock_user_name: String,
    /// Footer line.
    pub footer_text: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            app_title: "Atomic Auth".to_string(),
            storage_key: "atomic.user".to_string(),
            mock_latency_ms: 1000,
            mock_user_id: "1".to_string(),
            mock_user_name: "John Doe".to_string(),
            footer_text: "\u{a9} 2024 Atomic Auth. Built with Atomic Design principles."
                .to_string(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON override.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON or
    /// [`ConfigError::InvalidField`] when validation fails.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the stored override: absent means defaults.
    ///
    /// # Errors
    /// Same as [`UiConfig::from_json`] when an override is present.
    pub fn from_override(raw: Option<&str>) -> Result<Self, ConfigError> {
        raw.map_or_else(|| Ok(Self::default()), Self::from_json)
    }

    /// Check field constraints.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] for the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_title.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "app_title",
                value: self.app_title.clone(),
                reason: "empty",
            });
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "storage_key",
                value: self.storage_key.clone(),
                reason: "empty",
            });
        }
        if self.mock_latency_ms > MAX_MOCK_LATENCY_MS {
            return Err(ConfigError::InvalidField {
                field: "mock_latency_ms",
                value: self.mock_latency_ms.to_string(),
                reason: "exceeds_max",
            });
        }
        Ok(())
    }

    /// Simulated latency as a duration.
    #[must_use]
    pub const fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, UiConfig};
    use std::time::Duration;

    #[test]
    fn defaults_are_valid() {
        let config = UiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mock_latency(), Duration::from_secs(1));
        assert_eq!(config.storage_key, "atomic.user");
    }

    #[test]
    fn partial_override_merges_over_defaults() {
        let config = UiConfig::from_json(r#"{"mock_latency_ms": 250, "app_title": "Demo"}"#)
            .expect("valid override");
        assert_eq!(config.mock_latency_ms, 250);
        assert_eq!(config.app_title, "Demo");
        assert_eq!(config.mock_user_name, "John Doe");
    }

    #[test]
    fn excessive_latency_is_rejected() {
        let err = UiConfig::from_json(r#"{"mock_latency_ms": 120000}"#).expect_err("too slow");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "mock_latency_ms",
                reason: "exceeds_max",
                ..
            }
        ));
    }

    #[test]
    fn blank_storage_key_is_rejected() {
        let err = UiConfig::from_json(r#"{"storage_key": "  "}"#).expect_err("blank key");
        assert!(matches!(err, ConfigError::InvalidField { field: "storage_key", .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            UiConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_override_yields_defaults_but_malformed_one_errors() {
        assert_eq!(
            UiConfig::from_override(None).expect("no override"),
            UiConfig::default()
        );
        assert!(matches!(
            UiConfig::from_override(Some("{\"app_title\": ")),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(
            UiConfig::from_override(Some("{}")).expect("empty override"),
            UiConfig::default()
        );
    }
}

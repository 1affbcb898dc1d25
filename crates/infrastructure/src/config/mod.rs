//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings and log format
//! - `integrations`: OpenCage, Overpass, Calendarific
//! - `explorer`: POI category, holiday year, session limit and idle timeout
//!
//! Sources, later ones winning: built-in defaults, `config.toml` in the
//! working directory (optional), then `CITY_EXPLORER_*` environment variables
//! with `__` between nesting levels, e.g. `CITY_EXPLORER_OPENCAGE__API_KEY`.

mod explorer;
mod integrations;
mod server;

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use explorer::ExplorerAppConfig;
pub use integrations::{CalendarificAppConfig, OpenCageAppConfig, OverpassAppConfig};
pub use server::{LogFormat, ServerConfig};

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

const ENV_PREFIX: &str = "CITY_EXPLORER";

/// Problems found by [`AppConfig::validate`]
#[derive(Debug, Error)]
#[error("invalid configuration: {}", .problems.join("; "))]
pub struct ConfigValidationError {
    pub problems: Vec<String>,
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Geocoding configuration
    #[serde(default)]
    pub opencage: OpenCageAppConfig,

    /// Points-of-interest configuration
    #[serde(default)]
    pub overpass: OverpassAppConfig,

    /// Holiday configuration
    #[serde(default)]
    pub calendarific: CalendarificAppConfig,

    /// Explorer behaviour
    #[serde(default)]
    pub explorer: ExplorerAppConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., CITY_EXPLORER_SERVER__PORT)
            .add_source(Self::env_source());

        builder.build()?.try_deserialize()
    }

    /// Load configuration from a TOML document, without the environment
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn env_source() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Check that every collaborator can be reached with this configuration
    ///
    /// # Errors
    ///
    /// Lists every problem found, not just the first.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let mut problems = Vec::new();

        if self
            .opencage
            .api_key
            .as_ref()
            .is_none_or(|key| key.expose_secret().is_empty())
        {
            problems.push(format!(
                "opencage.api_key is not set (env {ENV_PREFIX}_OPENCAGE__API_KEY)"
            ));
        }
        if self
            .calendarific
            .api_key
            .as_ref()
            .is_none_or(|key| key.expose_secret().is_empty())
        {
            problems.push(format!(
                "calendarific.api_key is not set (env {ENV_PREFIX}_CALENDARIFIC__API_KEY)"
            ));
        }
        if let Err(e) = self.overpass.to_client_config().validate() {
            problems.push(format!("overpass: {e}"));
        }
        if let Err(e) = self.explorer.to_explorer_config() {
            problems.push(format!("explorer.poi_category: {e}"));
        }
        if self.explorer.max_sessions == 0 {
            problems.push("explorer.max_sessions must be greater than 0".to_string());
        }
        if self.explorer.session_idle_secs == 0 {
            problems.push("explorer.session_idle_secs must be greater than 0".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigValidationError { problems })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
        [server]
        port = 8080
        log_format = "json"

        [opencage]
        api_key = "oc-key"
        language = "es"

        [overpass]
        radius_m = 1500

        [calendarific]
        api_key = "cal-key"

        [explorer]
        poi_category = "nightclub"
        holiday_year = 2025
        session_idle_secs = 600
    "#;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, LogFormat::Text);
        assert_eq!(config.opencage.base_url, "https://api.opencagedata.com");
        assert_eq!(config.overpass.radius_m, 3000);
        assert_eq!(config.calendarific.base_url, "https://calendarific.com");
        assert_eq!(config.explorer.poi_category, "restaurant");
        assert!(config.explorer.holiday_year.is_none());
        assert_eq!(config.explorer.session_idle_secs, 1800);
    }

    #[test]
    fn parses_toml() {
        let config = AppConfig::from_toml_str(FULL).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(
            config.opencage.api_key.as_ref().map(|k| k.expose_secret().to_string()),
            Some("oc-key".to_string())
        );
        assert_eq!(config.overpass.radius_m, 1500);
        assert_eq!(config.explorer.holiday_year, Some(2025));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.overpass.base_url, "https://overpass-api.de");
    }

    #[test]
    fn missing_keys_are_reported_together() {
        let err = AppConfig::default().validate().unwrap_err();
        assert_eq!(err.problems.len(), 2);
        assert!(err.to_string().contains("opencage.api_key"));
        assert!(err.to_string().contains("calendarific.api_key"));
    }

    #[test]
    fn bad_category_is_reported() {
        let toml = FULL.replace("\"nightclub\"", "\"Night Club\"");
        let err = AppConfig::from_toml_str(&toml).unwrap().validate().unwrap_err();
        assert_eq!(err.problems.len(), 1);
        assert!(err.problems[0].starts_with("explorer.poi_category"));
    }

    #[test]
    fn api_keys_are_not_serialized() {
        let config = AppConfig::from_toml_str(FULL).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("oc-key"));
        assert!(!json.contains("cal-key"));
    }

    #[test]
    fn client_configs_carry_settings() {
        let config = AppConfig::from_toml_str(FULL).unwrap();
        let opencage = config.opencage.to_client_config();
        assert_eq!(opencage.api_key.as_deref(), Some("oc-key"));
        assert_eq!(opencage.language.as_deref(), Some("es"));
        assert_eq!(config.overpass.to_client_config().radius_m, 1500);
        assert_eq!(
            config.calendarific.to_client_config().api_key.as_deref(),
            Some("cal-key")
        );
        let explorer = config.explorer.to_explorer_config().unwrap();
        assert_eq!(explorer.poi_category.as_str(), "nightclub");
        assert_eq!(explorer.session_idle_timeout, std::time::Duration::from_secs(600));
    }

    #[test]
    fn zero_idle_timeout_is_reported() {
        let toml = FULL.replace("session_idle_secs = 600", "session_idle_secs = 0");
        let err = AppConfig::from_toml_str(&toml).unwrap().validate().unwrap_err();
        assert_eq!(err.problems, vec!["explorer.session_idle_secs must be greater than 0"]);
    }
}

//! Collaborator configurations: OpenCage, Overpass, Calendarific.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// OpenCage Configuration
// ==============================

/// Geocoding service configuration
///
/// Get an API key at <https://opencagedata.com/users/sign_up>.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenCageAppConfig {
    /// API key (sensitive)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_opencage_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_opencage_timeout")]
    pub timeout_secs: u64,

    /// Preferred language for result names (e.g. "es")
    #[serde(default)]
    pub language: Option<String>,
}

fn default_opencage_base_url() -> String {
    "https://api.opencagedata.com".to_string()
}

const fn default_opencage_timeout() -> u64 {
    10
}

impl Default for OpenCageAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_opencage_base_url(),
            timeout_secs: default_opencage_timeout(),
            language: None,
        }
    }
}

impl OpenCageAppConfig {
    /// Convert to `integration_opencage`'s `OpenCageConfig`
    #[must_use]
    pub fn to_client_config(&self) -> integration_opencage::OpenCageConfig {
        integration_opencage::OpenCageConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .map(|key| key.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
            language: self.language.clone(),
        }
    }
}

// ==============================
// Overpass Configuration
// ==============================

/// Points-of-interest service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassAppConfig {
    /// Overpass instance base URL
    #[serde(default = "default_overpass_base_url")]
    pub base_url: String,

    /// Search radius in meters
    #[serde(default = "default_overpass_radius")]
    pub radius_m: u32,

    /// Request timeout in seconds
    #[serde(default = "default_overpass_timeout")]
    pub timeout_secs: u64,
}

fn default_overpass_base_url() -> String {
    "https://overpass-api.de".to_string()
}

const fn default_overpass_radius() -> u32 {
    3000
}

const fn default_overpass_timeout() -> u64 {
    25
}

impl Default for OverpassAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_overpass_base_url(),
            radius_m: default_overpass_radius(),
            timeout_secs: default_overpass_timeout(),
        }
    }
}

impl OverpassAppConfig {
    /// Convert to `integration_overpass`'s `OverpassConfig`
    #[must_use]
    pub fn to_client_config(&self) -> integration_overpass::OverpassConfig {
        integration_overpass::OverpassConfig {
            base_url: self.base_url.clone(),
            radius_m: self.radius_m,
            timeout_secs: self.timeout_secs,
            ..integration_overpass::OverpassConfig::default()
        }
    }
}

// ==============================
// Calendarific Configuration
// ==============================

/// Holiday service configuration
///
/// Get an API key at <https://calendarific.com/signup>.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarificAppConfig {
    /// API key (sensitive)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_calendarific_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_calendarific_timeout")]
    pub timeout_secs: u64,
}

fn default_calendarific_base_url() -> String {
    "https://calendarific.com".to_string()
}

const fn default_calendarific_timeout() -> u64 {
    10
}

impl Default for CalendarificAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_calendarific_base_url(),
            timeout_secs: default_calendarific_timeout(),
        }
    }
}

impl CalendarificAppConfig {
    /// Convert to `integration_calendarific`'s `CalendarificConfig`
    #[must_use]
    pub fn to_client_config(&self) -> integration_calendarific::CalendarificConfig {
        integration_calendarific::CalendarificConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .map(|key| key.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
        }
    }
}

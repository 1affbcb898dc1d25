//! OpenCage client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the OpenCage geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenCageConfig {
    /// Base URL for the OpenCage API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (required to build a client)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Preferred language for formatted names (IETF tag, e.g. "es")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

fn default_base_url() -> String {
    "https://api.opencagedata.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for OpenCageConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            language: None,
        }
    }
}

impl OpenCageConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_key.as_deref().is_none_or(str::is_empty) {
            return Err("api_key must be set".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

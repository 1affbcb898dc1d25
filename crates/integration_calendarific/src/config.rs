//! Calendarific client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Calendarific holiday client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarificConfig {
    /// Base URL for the Calendarific API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (required to build a client)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://calendarific.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for CalendarificConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CalendarificConfig {
    /// Validate the configuration
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

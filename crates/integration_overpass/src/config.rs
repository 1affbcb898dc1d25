//! Overpass client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Overpass POI client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassConfig {
    /// Base URL of the Overpass instance
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Search radius around the selection in meters
    #[serde(default = "default_radius_m")]
    pub radius_m: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request (the public instances ask for one)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://overpass-api.de".to_string()
}

const fn default_radius_m() -> u32 {
    3000
}

const fn default_timeout_secs() -> u64 {
    25
}

fn default_user_agent() -> String {
    format!("city-explorer/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            radius_m: default_radius_m(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl OverpassConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if self.radius_m == 0 {
            return Err("radius_m must be greater than 0".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

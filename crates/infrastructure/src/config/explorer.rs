//! Explorer behaviour settings.

use std::time::Duration;

use application::ExplorerConfig;
use domain::{DomainError, PoiCategory};
use serde::{Deserialize, Serialize};

/// What the explorer shows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerAppConfig {
    /// OSM amenity tag for map markers (e.g. "restaurant", "nightclub")
    #[serde(default = "default_poi_category")]
    pub poi_category: String,

    /// Fixed holiday year; the current year when unset
    #[serde(default)]
    pub holiday_year: Option<i32>,

    /// Maximum number of open sessions
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Seconds without requests after which a session may be reclaimed
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,
}

fn default_poi_category() -> String {
    "restaurant".to_string()
}

const fn default_max_sessions() -> usize {
    1000
}

const fn default_session_idle_secs() -> u64 {
    1800
}

impl Default for ExplorerAppConfig {
    fn default() -> Self {
        Self {
            poi_category: default_poi_category(),
            holiday_year: None,
            max_sessions: default_max_sessions(),
            session_idle_secs: default_session_idle_secs(),
        }
    }
}

impl ExplorerAppConfig {
    /// Convert to the service's [`ExplorerConfig`]
    ///
    /// # Errors
    ///
    /// Returns an error if `poi_category` is not a valid amenity tag.
    pub fn to_explorer_config(&self) -> Result<ExplorerConfig, DomainError> {
        Ok(ExplorerConfig {
            poi_category: PoiCategory::new(&self.poi_category)?,
            holiday_year: self.holiday_year,
            max_sessions: self.max_sessions,
            session_idle_timeout: Duration::from_secs(self.session_idle_secs),
        })
    }
}

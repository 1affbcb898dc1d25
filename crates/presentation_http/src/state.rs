//! Application state shared across handlers

use std::sync::Arc;

use application::ExplorerService;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Session store and search orchestration
    pub explorer: Arc<ExplorerService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the OpenCage, Overpass and
//! Calendarific clients, and owns configuration loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, CalendarificAppConfig, ConfigValidationError, ExplorerAppConfig, LogFormat,
    OpenCageAppConfig, OverpassAppConfig, ServerConfig,
};
pub use telemetry::{TelemetryError, init_tracing};

//! Overpass error types

use thiserror::Error;

/// Errors returned by the Overpass client
#[derive(Debug, Error)]
pub enum OverpassError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    /// Amenity tag is not a plain OSM value
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Overpass answers 429 when too many slots are in use
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// 504 from Overpass usually means the server is overloaded
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },
}

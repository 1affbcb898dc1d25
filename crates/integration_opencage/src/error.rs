//! Geocoding error types

use thiserror::Error;

/// Errors that can occur while geocoding
#[derive(Debug, Error)]
pub enum OpenCageError {
    /// Connection to the geocoding service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the geocoding service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the geocoding service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Query is empty or rejected by the service
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// API key is missing, invalid or disabled
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Daily request quota used up
    #[error("Quota exceeded")]
    QuotaExceeded,

    /// Too many requests per second
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

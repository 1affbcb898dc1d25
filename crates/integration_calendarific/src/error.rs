//! Calendarific error types

use thiserror::Error;

/// Errors returned by the Calendarific client
#[derive(Debug, Error)]
pub enum CalendarificError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Monthly request quota used up
    #[error("Quota exceeded")]
    QuotaExceeded,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },
}

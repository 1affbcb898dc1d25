//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Requested place or session does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected before any work was done
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_converts() {
        let err: ApplicationError = DomainError::InvalidCountryCode("XYZ".to_string()).into();
        assert!(matches!(err, ApplicationError::Domain(_)));
        assert_eq!(err.to_string(), "Invalid country code: XYZ");
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            ApplicationError::InvalidInput("empty query".to_string()).to_string(),
            "Invalid input: empty query"
        );
    }
}

//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Country code is not an ISO 3166-1 alpha-2 code
    #[error("Invalid country code: {0}")]
    InvalidCountryCode(String),

    /// Point-of-interest category is not a plain amenity tag
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
}

//! ISO 3166-1 alpha-2 country code
//!
//! # Examples
//!
//! ```
//! use domain::CountryCode;
//!
//! let code = CountryCode::new("es").unwrap();
//! assert_eq!(code.as_str(), "ES");
//!
//! assert!(CountryCode::new("Spain").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A two-letter country code, always upper case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code, normalising to upper case
    ///
    /// # Errors
    ///
    /// Returns an error unless the input is exactly two ASCII letters
    /// (surrounding whitespace is ignored).
    pub fn new(code: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = code.as_ref().trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCountryCode(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

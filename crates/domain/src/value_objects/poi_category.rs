//! Point-of-interest category
//!
//! A category is an OpenStreetMap `amenity` tag value such as `restaurant`
//! or `nightclub`. Only lower-case letters and underscores are accepted, so
//! the value can be embedded into a map-data query verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// An amenity tag used to select points of interest
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PoiCategory(String);

impl PoiCategory {
    /// Create a category from a tag value
    ///
    /// # Errors
    ///
    /// Returns an error for empty tags or tags containing anything other
    /// than ASCII letters and underscores.
    pub fn new(tag: impl AsRef<str>) -> Result<Self, DomainError> {
        let tag = tag.as_ref().trim().to_ascii_lowercase();
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
            return Err(DomainError::InvalidCategory(tag));
        }
        Ok(Self(tag))
    }

    /// Restaurants
    #[must_use]
    pub fn restaurant() -> Self {
        Self("restaurant".to_string())
    }

    /// Nightclubs
    #[must_use]
    pub fn nightclub() -> Self {
        Self("nightclub".to_string())
    }

    /// Get the tag value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PoiCategory {
    fn default() -> Self {
        Self::restaurant()
    }
}

impl fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PoiCategory {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PoiCategory> for String {
    fn from(category: PoiCategory) -> Self {
        category.0
    }
}

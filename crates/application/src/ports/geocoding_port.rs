//! Geocoding port
//!
//! Resolves a free-text place name to a position.

use async_trait::async_trait;
use domain::value_objects::{CountryCode, GeoLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Best match for a place name
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub location: GeoLocation,
    /// Absent when the geocoder reports no (valid) country
    pub country_code: Option<CountryCode>,
}

/// Port for forward geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Look up `query`
    ///
    /// `Ok(None)` means the service answered but knows no such place; errors
    /// are reserved for transport and protocol failures.
    async fn geocode(&self, query: &str) -> Result<Option<GeocodedPlace>, ApplicationError>;
}

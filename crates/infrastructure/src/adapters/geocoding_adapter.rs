//! Geocoding adapter - Implements GeocodingPort using integration_opencage

use application::error::ApplicationError;
use application::ports::{GeocodedPlace, GeocodingPort};
use async_trait::async_trait;
use domain::value_objects::{CountryCode, GeoLocation};
use integration_opencage::{
    GeocodeResult, GeocodingClient, OpenCageClient, OpenCageConfig, OpenCageError,
};
use tracing::{debug, instrument, warn};

/// Adapter for forward geocoding via OpenCage
#[derive(Debug)]
pub struct GeocodingAdapter {
    client: OpenCageClient,
}

impl GeocodingAdapter {
    /// Create an adapter from client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails to initialize.
    pub fn new(config: &OpenCageConfig) -> Result<Self, ApplicationError> {
        let client = OpenCageClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration geocoding error to application error
    fn map_error(err: OpenCageError) -> ApplicationError {
        match err {
            OpenCageError::ConnectionFailed(e)
            | OpenCageError::RequestFailed(e)
            | OpenCageError::ParseError(e)
            | OpenCageError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            OpenCageError::Timeout { timeout_secs } => ApplicationError::ExternalService(
                format!("geocoder timed out after {timeout_secs}s"),
            ),
            OpenCageError::InvalidQuery(e) => ApplicationError::InvalidInput(e),
            OpenCageError::AuthenticationFailed(e) | OpenCageError::ConfigurationError(e) => {
                ApplicationError::Configuration(e)
            },
            OpenCageError::QuotaExceeded | OpenCageError::RateLimitExceeded => {
                ApplicationError::RateLimited
            },
        }
    }

    /// Convert a raw match; out-of-range coordinates count as no match
    fn to_place(result: GeocodeResult) -> Option<GeocodedPlace> {
        let Ok(location) = GeoLocation::new(result.latitude, result.longitude) else {
            warn!(
                latitude = result.latitude,
                longitude = result.longitude,
                "Geocoder returned out-of-range coordinates"
            );
            return None;
        };

        let country_code = result.country_code.and_then(|code| {
            CountryCode::new(&code)
                .inspect_err(|_| debug!(code = %code, "Ignoring unusable country code"))
                .ok()
        });

        Some(GeocodedPlace {
            location,
            country_code,
        })
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<Option<GeocodedPlace>, ApplicationError> {
        let result = self.client.geocode(query).await.map_err(Self::map_error)?;
        Ok(result.and_then(Self::to_place))
    }
}

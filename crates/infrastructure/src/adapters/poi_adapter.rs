//! POI adapter - Implements PoiPort using integration_overpass

use application::error::ApplicationError;
use application::ports::PoiPort;
use async_trait::async_trait;
use domain::entities::PointOfInterest;
use domain::value_objects::{GeoLocation, PoiCategory};
use integration_overpass::{OverpassClient, OverpassConfig, OverpassError, Poi, PoiClient};
use tracing::{debug, instrument};

/// Adapter for nearby amenities via Overpass
#[derive(Debug)]
pub struct PoiAdapter {
    client: OverpassClient,
}

impl PoiAdapter {
    /// Create an adapter from client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &OverpassConfig) -> Result<Self, ApplicationError> {
        let client = OverpassClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    fn map_error(err: OverpassError) -> ApplicationError {
        match err {
            OverpassError::ConnectionFailed(e)
            | OverpassError::RequestFailed(e)
            | OverpassError::ParseError(e)
            | OverpassError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            OverpassError::Timeout { timeout_secs } => ApplicationError::ExternalService(format!(
                "overpass timed out after {timeout_secs}s"
            )),
            OverpassError::InvalidCategory(e) => ApplicationError::InvalidInput(e),
            OverpassError::ConfigurationError(e) => ApplicationError::Configuration(e),
            OverpassError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    fn to_point(poi: Poi) -> Option<PointOfInterest> {
        let location = GeoLocation::new(poi.latitude, poi.longitude).ok()?;
        Some(PointOfInterest::new(poi.id, poi.name, location))
    }
}

#[async_trait]
impl PoiPort for PoiAdapter {
    #[instrument(skip(self))]
    async fn find_nearby(
        &self,
        location: GeoLocation,
        category: &PoiCategory,
    ) -> Result<Vec<PointOfInterest>, ApplicationError> {
        let pois = self
            .client
            .find_pois(location.latitude(), location.longitude(), category.as_str())
            .await
            .map_err(Self::map_error)?;

        let total = pois.len();
        let points: Vec<_> = pois.into_iter().filter_map(Self::to_point).collect();
        if points.len() < total {
            debug!(dropped = total - points.len(), "Dropped POIs with invalid coordinates");
        }
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_poi() {
        let point = PoiAdapter::to_point(Poi {
            id: 42,
            name: "Bar Marsella".to_string(),
            latitude: 41.3786,
            longitude: 2.1717,
        })
        .unwrap();
        assert_eq!(point.id, 42);
        assert_eq!(point.name, "Bar Marsella");
    }

    #[test]
    fn drops_invalid_position() {
        let poi = Poi {
            id: 1,
            name: "Nowhere".to_string(),
            latitude: f64::NAN,
            longitude: 0.0,
        };
        assert!(PoiAdapter::to_point(poi).is_none());
    }

    #[test]
    fn map_error_rate_limited() {
        let err = PoiAdapter::map_error(OverpassError::RateLimitExceeded);
        assert!(matches!(err, ApplicationError::RateLimited));
    }

    #[test]
    fn map_error_timeout() {
        let err = PoiAdapter::map_error(OverpassError::Timeout { timeout_secs: 25 });
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }
}

//! Points-of-interest port

use async_trait::async_trait;
use domain::entities::PointOfInterest;
use domain::value_objects::{GeoLocation, PoiCategory};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for nearby amenity lookup
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PoiPort: Send + Sync {
    /// Points of `category` around `location`, in service order
    async fn find_nearby(
        &self,
        location: GeoLocation,
        category: &PoiCategory,
    ) -> Result<Vec<PointOfInterest>, ApplicationError>;
}

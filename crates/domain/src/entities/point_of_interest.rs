//! A named place near the selection

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// A point of interest returned by the map-data service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Map-data element identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Position (element center for areas)
    pub location: GeoLocation,
}

impl PointOfInterest {
    /// Create a point of interest
    pub fn new(id: u64, name: impl Into<String>, location: GeoLocation) -> Self {
        Self {
            id,
            name: name.into(),
            location,
        }
    }
}

//! The place the user is currently looking at

use serde::{Deserialize, Serialize};

use crate::value_objects::{CountryCode, GeoLocation};

/// Result of a successful search: the searched name plus where it is
///
/// Location and country code travel together; a selection is only ever
/// replaced as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSelection {
    /// Name as the user typed it
    pub name: String,
    /// Geocoded position
    pub location: GeoLocation,
    /// Country the position lies in, when the geocoder reported one
    pub country_code: Option<CountryCode>,
}

impl PlaceSelection {
    /// Create a selection
    pub fn new(
        name: impl Into<String>,
        location: GeoLocation,
        country_code: Option<CountryCode>,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            country_code,
        }
    }

    /// Whether holidays can be looked up for this place
    pub const fn has_country(&self) -> bool {
        self.country_code.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_without_country_has_no_holidays() {
        let selection = PlaceSelection::new("Atlantis", GeoLocation::new_unchecked(0.0, 0.0), None);
        assert!(!selection.has_country());
    }

    #[test]
    fn serializes_country_as_code() {
        let selection = PlaceSelection::new(
            "Madrid",
            GeoLocation::madrid(),
            Some(CountryCode::new("es").unwrap()),
        );
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["country_code"], "ES");
        assert_eq!(json["name"], "Madrid");
    }
}

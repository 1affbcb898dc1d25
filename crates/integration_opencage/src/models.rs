//! OpenCage response models

use serde::{Deserialize, Serialize};

/// The best match for a geocoding query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// ISO 3166-1 alpha-2 country code, upper case, when reported
    pub country_code: Option<String>,
}

/// Raw API envelope
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub results: Vec<ApiResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResult {
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub components: Components,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Components {
    #[serde(rename = "ISO_3166-1_alpha-2")]
    pub iso_alpha2: Option<String>,
    pub country_code: Option<String>,
}

impl ApiResponse {
    /// First result with a geometry, converted; `None` if there is none
    ///
    /// Only the first result is considered: a first result without geometry
    /// counts as "not found" rather than falling through to weaker matches.
    pub fn into_best_match(self) -> Option<GeocodeResult> {
        let first = self.results.into_iter().next()?;
        let geometry = first.geometry?;

        let country_code = first
            .components
            .iso_alpha2
            .or(first.components.country_code)
            .map(|code| code.trim().to_ascii_uppercase())
            .filter(|code| !code.is_empty());

        Some(GeocodeResult {
            latitude: geometry.lat,
            longitude: geometry.lng,
            country_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ApiResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn picks_iso_component() {
        let response = parse(
            r#"{"results":[{"geometry":{"lat":40.4,"lng":-3.7},
                "components":{"ISO_3166-1_alpha-2":"ES","country_code":"es"},
                "formatted":"Madrid, Spain"}]}"#,
        );
        let result = response.into_best_match().unwrap();
        assert_eq!(result.country_code.as_deref(), Some("ES"));
    }

    #[test]
    fn falls_back_to_lower_case_country_code() {
        let response = parse(
            r#"{"results":[{"geometry":{"lat":48.85,"lng":2.35},
                "components":{"country_code":"fr"}}]}"#,
        );
        let result = response.into_best_match().unwrap();
        assert_eq!(result.country_code.as_deref(), Some("FR"));
    }

    #[test]
    fn missing_geometry_is_no_match() {
        let response = parse(r#"{"results":[{"components":{"country_code":"fr"}}]}"#);
        assert!(response.into_best_match().is_none());
    }

    #[test]
    fn empty_results_is_no_match() {
        assert!(parse(r#"{"results":[]}"#).into_best_match().is_none());
        assert!(parse("{}").into_best_match().is_none());
    }

    #[test]
    fn missing_components_leave_country_empty() {
        let response = parse(r#"{"results":[{"geometry":{"lat":0.0,"lng":0.0}}]}"#);
        assert!(response.into_best_match().unwrap().country_code.is_none());
    }
}

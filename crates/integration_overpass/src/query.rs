//! Overpass QL query construction

use std::fmt::Write;

/// Build the Overpass QL query for amenities of `category` around a point
///
/// `category` must already be validated; it is interpolated verbatim.
pub fn amenity_query(latitude: f64, longitude: f64, radius_m: u32, category: &str) -> String {
    let mut query = String::from("[out:json];(");
    for kind in ["node", "way", "relation"] {
        let _ = write!(
            query,
            r#"{kind}["amenity"="{category}"](around:{radius_m},{latitude},{longitude});"#
        );
    }
    query.push_str(");out center;");
    query
}

/// OSM tag values are lower-case words joined by underscores
pub(crate) fn is_valid_category(category: &str) -> bool {
    !category.is_empty()
        && category
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '_')
}

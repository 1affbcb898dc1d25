//! Plain-text rendering of session snapshots

use std::fmt::Write;

use serde_json::Value;

const MAX_LISTED_POIS: usize = 10;

fn coordinates(location: &Value) -> String {
    match (location["latitude"].as_f64(), location["longitude"].as_f64()) {
        (Some(lat), Some(lon)) => format!("{lat:.4}, {lon:.4}"),
        _ => "?".to_string(),
    }
}

/// Selected place and the POIs around it
pub fn selection(snapshot: &Value) -> String {
    let selection = &snapshot["selection"];
    if selection.is_null() {
        return "No city selected\n".to_string();
    }

    let mut out = String::new();
    let name = selection["name"].as_str().unwrap_or("?");
    let country = selection["country_code"].as_str().unwrap_or("no country");
    let _ = writeln!(out, "{name} ({country}) at {}", coordinates(&selection["location"]));

    let pois = snapshot["pois"].as_array().map_or(&[][..], Vec::as_slice);
    let _ = writeln!(out, "\nNearby: {} found", pois.len());
    for poi in pois.iter().take(MAX_LISTED_POIS) {
        let _ = writeln!(out, "  - {}", poi["name"].as_str().unwrap_or("?"));
    }
    if pois.len() > MAX_LISTED_POIS {
        let _ = writeln!(out, "  ... and {} more", pois.len() - MAX_LISTED_POIS);
    }
    out
}

/// The holiday page the snapshot shows
pub fn holiday_page(snapshot: &Value) -> String {
    let panel = &snapshot["holidays"];
    let items = panel["items"].as_array().map_or(&[][..], Vec::as_slice);
    if items.is_empty() {
        return "No holidays\n".to_string();
    }

    let mut out = String::new();
    let page = panel["page"].as_u64().unwrap_or(0) + 1;
    let total = panel["total_pages"].as_u64().unwrap_or(1);
    let _ = writeln!(out, "Holidays (page {page} of {total})");
    for holiday in items {
        let _ = writeln!(
            out,
            "  {}  {}",
            holiday["date"].as_str().unwrap_or("?"),
            holiday["name"].as_str().unwrap_or("?")
        );
    }
    out
}

/// Whether another holiday page follows
pub fn has_next_page(snapshot: &Value) -> bool {
    snapshot["holidays"]["has_next"].as_bool().unwrap_or(false)
}

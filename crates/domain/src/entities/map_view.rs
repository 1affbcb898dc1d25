//! Map display model
//!
//! The map widget itself lives in the page; this type is what it renders
//! from. Every new selection bumps `recenter_seq` exactly once, and the widget
//! flies to `center` whenever it sees a sequence number it has not handled.

use serde::Serialize;

use crate::entities::{PlaceSelection, PointOfInterest};
use crate::value_objects::GeoLocation;

/// Zoom level used for the initial view and every recenter
pub const DEFAULT_ZOOM: u8 = 12;

/// What a marker stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// The searched place
    Selection,
    /// A nearby point of interest
    PointOfInterest,
}

/// A pin on the map with its popup text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub kind: MarkerKind,
    pub label: String,
    pub location: GeoLocation,
}

/// Current state of the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    center: GeoLocation,
    zoom: u8,
    recenter_seq: u64,
    selection_marker: Option<MapMarker>,
    poi_markers: Vec<MapMarker>,
}

impl MapView {
    /// Map resting on `center` with no markers
    #[must_use]
    pub const fn new(center: GeoLocation) -> Self {
        Self {
            center,
            zoom: DEFAULT_ZOOM,
            recenter_seq: 0,
            selection_marker: None,
            poi_markers: Vec::new(),
        }
    }

    /// React to a new selection: move there and pin it
    pub fn focus(&mut self, selection: &PlaceSelection) {
        self.center = selection.location;
        self.zoom = DEFAULT_ZOOM;
        self.recenter_seq += 1;
        self.selection_marker = Some(MapMarker {
            kind: MarkerKind::Selection,
            label: selection.name.clone(),
            location: selection.location,
        });
    }

    /// Replace the POI markers
    pub fn show_pois(&mut self, pois: &[PointOfInterest]) {
        self.poi_markers = pois
            .iter()
            .map(|poi| MapMarker {
                kind: MarkerKind::PointOfInterest,
                label: poi.name.clone(),
                location: poi.location,
            })
            .collect();
    }

    pub const fn center(&self) -> GeoLocation {
        self.center
    }

    pub const fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Number of recenters requested so far
    pub const fn recenter_seq(&self) -> u64 {
        self.recenter_seq
    }

    pub const fn selection_marker(&self) -> Option<&MapMarker> {
        self.selection_marker.as_ref()
    }

    pub fn poi_markers(&self) -> &[MapMarker] {
        &self.poi_markers
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(GeoLocation::barcelona())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_barcelona_without_markers() {
        let map = MapView::default();
        assert_eq!(map.center(), GeoLocation::barcelona());
        assert_eq!(map.zoom(), DEFAULT_ZOOM);
        assert_eq!(map.recenter_seq(), 0);
        assert!(map.selection_marker().is_none());
        assert!(map.poi_markers().is_empty());
    }

    #[test]
    fn focus_requests_one_recenter() {
        let mut map = MapView::default();
        let selection = PlaceSelection::new("Madrid", GeoLocation::madrid(), None);

        map.focus(&selection);

        assert_eq!(map.center(), GeoLocation::madrid());
        assert_eq!(map.zoom(), DEFAULT_ZOOM);
        assert_eq!(map.recenter_seq(), 1);
        assert_eq!(map.selection_marker().map(|m| m.label.as_str()), Some("Madrid"));

        // Same place again still recenters
        map.focus(&selection);
        assert_eq!(map.recenter_seq(), 2);
    }

    #[test]
    fn show_pois_replaces_markers() {
        let mut map = MapView::default();
        let a = PointOfInterest::new(1, "A", GeoLocation::madrid());
        let b = PointOfInterest::new(2, "B", GeoLocation::madrid());
        map.show_pois(&[a.clone(), b]);
        assert_eq!(map.poi_markers().len(), 2);
        map.show_pois(&[a]);
        assert_eq!(map.poi_markers().len(), 1);
        assert_eq!(map.poi_markers()[0].kind, MarkerKind::PointOfInterest);
    }

    #[test]
    fn serializes_view_for_the_page() {
        let mut map = MapView::default();
        map.focus(&PlaceSelection::new("Madrid", GeoLocation::madrid(), None));
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["recenter_seq"], 1);
        assert_eq!(json["zoom"], 12);
        assert_eq!(json["selection_marker"]["kind"], "selection");
    }
}

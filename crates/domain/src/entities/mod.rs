//! Domain entities - the things the explorer shows

mod holiday;
mod map_view;
mod place_selection;
mod point_of_interest;

pub use holiday::Holiday;
pub use map_view::{DEFAULT_ZOOM, MapMarker, MapView, MarkerKind};
pub use place_selection::PlaceSelection;
pub use point_of_interest::PointOfInterest;

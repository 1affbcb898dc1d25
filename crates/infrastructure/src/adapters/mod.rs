//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod geocoding_adapter;
mod holiday_adapter;
mod poi_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use holiday_adapter::HolidayAdapter;
pub use poi_adapter::PoiAdapter;

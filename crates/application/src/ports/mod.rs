//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod holiday_port;
mod poi_port;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::{GeocodedPlace, GeocodingPort};
#[cfg(test)]
pub use holiday_port::MockHolidayPort;
pub use holiday_port::HolidayPort;
#[cfg(test)]
pub use poi_port::MockPoiPort;
pub use poi_port::PoiPort;

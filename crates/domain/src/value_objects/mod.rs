//! Value Objects - Immutable, identity-less domain primitives

mod country_code;
mod geo_location;
mod poi_category;
mod selection_token;
mod session_id;

pub use country_code::CountryCode;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use poi_category::PoiCategory;
pub use selection_token::{SearchTicket, SelectionToken};
pub use session_id::SessionId;

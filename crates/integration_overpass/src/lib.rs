//! Overpass API integration
//!
//! Finds OpenStreetMap amenities around a coordinate using the
//! [Overpass API](https://wiki.openstreetmap.org/wiki/Overpass_API).
//! Nodes, ways and relations are all searched; ways and relations are
//! positioned at the center Overpass computes for them.

mod client;
mod config;
mod error;
mod models;
mod query;

pub use client::{OverpassClient, PoiClient};
pub use config::OverpassConfig;
pub use error::OverpassError;
pub use models::Poi;
pub use query::amenity_query;

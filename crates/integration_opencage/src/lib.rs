//! OpenCage geocoding integration
//!
//! Resolves a free-text place name to coordinates and a country code via the
//! [OpenCage Geocoding API](https://opencagedata.com/api).
//!
//! [`GeocodingClient`] is the interface, [`OpenCageClient`] the HTTP
//! implementation. A query without a usable match yields `Ok(None)`;
//! transport, authentication and parse failures are [`OpenCageError`]s.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_opencage::{GeocodingClient, OpenCageClient, OpenCageConfig};
//!
//! let config = OpenCageConfig {
//!     api_key: Some("your-key".to_string()),
//!     ..OpenCageConfig::default()
//! };
//! let client = OpenCageClient::new(&config)?;
//!
//! if let Some(place) = client.geocode("Valencia").await? {
//!     println!("{}, {} ({:?})", place.latitude, place.longitude, place.country_code);
//! }
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, OpenCageClient};
pub use config::OpenCageConfig;
pub use error::OpenCageError;
pub use models::GeocodeResult;

//! Application layer - Use cases and orchestration
//!
//! Contains the per-tab explorer session, the session store and the
//! [`ExplorerService`] that sequences geocoding, POI and holiday lookups.
//! Collaborators are reached only through the ports in [`ports`].

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

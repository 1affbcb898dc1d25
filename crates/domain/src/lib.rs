//! Domain layer for City Explorer
//!
//! Contains the place selection model, points of interest, holidays,
//! the map view model and list pagination. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod pagination;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use pagination::{HOLIDAYS_PER_PAGE, PageView, PagedList};
pub use value_objects::*;

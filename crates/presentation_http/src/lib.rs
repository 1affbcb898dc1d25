//! City Explorer HTTP presentation layer
//!
//! Serves the single-page map UI and the JSON session API it drives.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{RequestId, RequestIdLayer};
pub use routes::{create_app, create_router};
pub use state::AppState;

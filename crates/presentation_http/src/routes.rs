//! Route definitions and the middleware stack

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Page
        .route("/", get(handlers::page::index))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Session API (v1)
        .route("/v1/sessions", post(handlers::sessions::create_session))
        .route(
            "/v1/sessions/{id}",
            get(handlers::sessions::get_session).delete(handlers::sessions::delete_session),
        )
        .route("/v1/sessions/{id}/search", post(handlers::sessions::search))
        .route(
            "/v1/sessions/{id}/holidays/next",
            post(handlers::sessions::next_holidays),
        )
        .route(
            "/v1/sessions/{id}/holidays/previous",
            post(handlers::sessions::previous_holidays),
        )
        .with_state(state)
}

/// Router wrapped in tracing, request ids, CORS and the body limit
pub fn create_app(state: AppState) -> Router {
    let server = state.config.server.clone();
    let mut app = create_router(state).layer(DefaultBodyLimit::max(server.max_body_size_json_bytes));

    if server.cors_enabled {
        app = app.layer(cors_layer(&server.allowed_origins));
    }

    // Last added is outermost: the request id span wraps the trace span
    app.layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring unparsable CORS origin");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

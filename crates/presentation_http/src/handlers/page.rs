//! The single-page map UI

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Serve the explorer page; it talks to the session API from the browser
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

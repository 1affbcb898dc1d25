//! Session API handlers
//!
//! Every successful call answers with the full [`SessionSnapshot`], so the
//! page can re-render from one response.

use application::SessionSnapshot;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use domain::SessionId;
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::AppState};

/// Search request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text place name
    pub query: String,
}

fn parse_session_id(raw: &str) -> Result<SessionId, ApiError> {
    SessionId::parse(raw).map_err(|_| ApiError::BadRequest(format!("invalid session id '{raw}'")))
}

/// Open a session
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionSnapshot>), ApiError> {
    let snapshot = state.explorer.create_session()?;
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// Current state of a session
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let id = parse_session_id(&id)?;
    Ok(Json(state.explorer.snapshot(id)?))
}

/// Close a session
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_session_id(&id)?;
    state.explorer.close_session(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search for a place and select it
pub async fn search(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let id = parse_session_id(&id)?;
    let Json(request) = body?;
    Ok(Json(state.explorer.search(id, &request.query).await?))
}

/// Show the next page of holidays
pub async fn next_holidays(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let id = parse_session_id(&id)?;
    Ok(Json(state.explorer.next_holiday_page(id)?))
}

/// Show the previous page of holidays
pub async fn previous_holidays(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let id = parse_session_id(&id)?;
    Ok(Json(state.explorer.previous_holiday_page(id)?))
}

//! Reference data handlers.

use axum::Json;
use axum::extract::State;

use freshgrad_entity::reference::{StatusMeta, Track};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/reference/tracks
pub async fn list_tracks(State(state): State<AppState>) -> Result<Json<Vec<Track>>, ApiError> {
    Ok(Json(state.reference_repo.tracks().await?))
}

/// GET /api/reference/statuses
pub async fn list_statuses(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusMeta>>, ApiError> {
    Ok(Json(state.reference_repo.status_meta().await?))
}

//! Mentor registry handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use freshgrad_entity::mentor::Mentor;
use freshgrad_service::mentor::{CreateMentorInput, UpdateMentorInput};

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/mentors
pub async fn list_mentors(State(state): State<AppState>) -> Result<Json<Vec<Mentor>>, ApiError> {
    Ok(Json(state.mentor_service.list().await?))
}

/// POST /api/mentors
pub async fn create_mentor(
    State(state): State<AppState>,
    Json(req): Json<CreateMentorInput>,
) -> Result<(StatusCode, Json<Mentor>), ApiError> {
    let mentor = state.mentor_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(mentor)))
}

/// PUT /api/mentors/{id}
pub async fn update_mentor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateMentorInput>,
) -> Result<Json<Mentor>, ApiError> {
    Ok(Json(state.mentor_service.update(&id, req).await?))
}

/// DELETE /api/mentors/{id}
pub async fn delete_mentor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.mentor_service.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Mentor deleted".to_string(),
    }))
}

//! Candidate handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use freshgrad_entity::candidate::Candidate;
use freshgrad_service::candidate::{CreateCandidateInput, UpdateCandidateInput};

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/candidates
pub async fn list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<Candidate>>, ApiError> {
    Ok(Json(state.candidate_service.list().await?))
}

/// POST /api/candidates
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(req): Json<CreateCandidateInput>,
) -> Result<(StatusCode, Json<Candidate>), ApiError> {
    let candidate = state.candidate_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

/// GET /api/candidates/{id}
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Candidate>, ApiError> {
    Ok(Json(state.candidate_service.get(&id).await?))
}

/// PUT /api/candidates/{id}
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCandidateInput>,
) -> Result<Json<Candidate>, ApiError> {
    Ok(Json(state.candidate_service.update(&id, req).await?))
}

/// DELETE /api/candidates/{id}
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.candidate_service.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Candidate deleted".to_string(),
    }))
}

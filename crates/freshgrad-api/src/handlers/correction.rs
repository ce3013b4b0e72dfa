//! Correction workflow handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use freshgrad_entity::correction::Correction;
use freshgrad_service::correction::{CreateCorrectionInput, RespondInput};

use crate::dto::request::RejectCorrectionRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/corrections
pub async fn list_corrections(
    State(state): State<AppState>,
) -> Result<Json<Vec<Correction>>, ApiError> {
    Ok(Json(state.correction_service.list().await?))
}

/// GET /api/candidates/{id}/corrections
pub async fn list_candidate_corrections(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Correction>>, ApiError> {
    Ok(Json(state.correction_service.list_for_candidate(&id).await?))
}

/// POST /api/candidates/{id}/corrections
pub async fn create_correction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CreateCorrectionInput>,
) -> Result<(StatusCode, Json<Correction>), ApiError> {
    let correction = state.correction_service.create(&id, req).await?;
    Ok((StatusCode::CREATED, Json(correction)))
}

/// PUT /api/corrections/{id}/resolve
pub async fn resolve_correction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Correction>, ApiError> {
    Ok(Json(state.correction_service.resolve(id).await?))
}

/// PUT /api/corrections/{id}/reject
pub async fn reject_correction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RejectCorrectionRequest>,
) -> Result<Json<Correction>, ApiError> {
    let reason = req.reason.unwrap_or_default();
    Ok(Json(state.correction_service.reject(id, &reason).await?))
}

/// PUT /api/corrections/{id}/respond
pub async fn respond_correction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RespondInput>,
) -> Result<Json<Correction>, ApiError> {
    Ok(Json(state.correction_service.respond(id, req).await?))
}

//! Audit log handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use sqlx::types::Json as Jsonb;
use uuid::Uuid;
use validator::Validate;

use freshgrad_core::error::AppError;
use freshgrad_entity::audit::AuditEntry;

use crate::dto::request::CreateAuditRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// Filter accepted by the audit listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditQuery {
    /// Filter by event type tag.
    pub event_type: Option<String>,
}

/// GET /api/audit?eventType=
pub async fn list_audit(
    State(state): State<AppState>,
    Query(params): Query<AuditQuery>,
) -> Result<Json<Vec<AuditEntry>>, ApiError> {
    let entries = state
        .audit_repo
        .find_all(params.event_type.as_deref())
        .await?;
    Ok(Json(entries))
}

/// POST /api/audit
pub async fn append_audit(
    State(state): State<AppState>,
    Json(req): Json<CreateAuditRequest>,
) -> Result<(StatusCode, Json<AuditEntry>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let entry = AuditEntry {
        id: Uuid::new_v4(),
        event_type: req.event_type,
        payload: Jsonb(req.payload.unwrap_or_else(|| json!({}))),
        created_at: Utc::now(),
    };

    let created = state.audit_repo.append(&entry).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

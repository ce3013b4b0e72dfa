//! Notification handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use sqlx::types::Json as Jsonb;
use uuid::Uuid;
use validator::Validate;

use freshgrad_core::error::AppError;
use freshgrad_entity::notification::Notification;
use freshgrad_entity::user::UserRole;

use crate::dto::request::CreateNotificationRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// Addressee filter accepted by the notification listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationQuery {
    /// Filter by addressed email.
    pub email: Option<String>,
    /// Filter by addressed role.
    pub role: Option<UserRole>,
}

/// GET /api/notifications?email=&role=
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(params): Query<NotificationQuery>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let notifications = state
        .notification_repo
        .find_addressed(params.email.as_deref(), params.role)
        .await?;
    Ok(Json(notifications))
}

/// POST /api/notifications
pub async fn create_notification(
    State(state): State<AppState>,
    Json(req): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<Notification>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    if req.email.is_none() && req.role.is_none() {
        return Err(AppError::validation(
            "A notification needs an email or a role addressee",
        )
        .into());
    }

    let notification = Notification {
        id: Uuid::new_v4(),
        email: req.email,
        role: req.role,
        kind: req.kind,
        title: req.title,
        body: req.body,
        target: Jsonb(req.target.unwrap_or_else(|| json!({}))),
        read: false,
        created_at: Utc::now(),
    };

    let created = state.notification_repo.create(&notification).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Notification>, ApiError> {
    Ok(Json(state.notification_repo.mark_read(id).await?))
}

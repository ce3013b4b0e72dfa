//! User administration handlers, keyed by email.

use axum::Json;
use axum::extract::{Path, State};

use freshgrad_entity::user::User;
use freshgrad_service::user::UpdateUserInput;

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.user_service.list().await?))
}

/// PUT /api/users/{email}
pub async fn update_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(req): Json<UpdateUserInput>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.user_service.update(&email, req).await?))
}

/// DELETE /api/users/{email}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.user_service.delete(&email).await?;
    Ok(Json(MessageResponse {
        message: "User deleted".to_string(),
    }))
}

//! Auth handlers: register and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use freshgrad_core::error::AppError;
use freshgrad_entity::user::User;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::LoginResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/users/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .register(&req.email, &req.password, &req.name, req.role)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/users/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.user_service.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        user: outcome.user,
        access_token: outcome.access_token,
        expires_at: outcome.expires_at,
    }))
}

//! Course catalogue handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use freshgrad_entity::course::Course;
use freshgrad_service::course::{CreateCourseInput, UpdateCourseInput};

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/courses
///
/// Active courses only; deactivated ones stay out of the listing.
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, ApiError> {
    Ok(Json(state.course_service.list_active().await?))
}

/// POST /api/courses
pub async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<CreateCourseInput>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    let course = state.course_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// PUT /api/courses/{id}
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCourseInput>,
) -> Result<Json<Course>, ApiError> {
    Ok(Json(state.course_service.update(&id, req).await?))
}

/// DELETE /api/courses/{id}
///
/// Soft delete: flips the active flag and preserves enrollment history.
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.course_service.deactivate(&id).await?;
    Ok(Json(MessageResponse {
        message: "Course deactivated".to_string(),
    }))
}

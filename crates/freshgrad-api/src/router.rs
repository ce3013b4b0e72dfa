//! Route definitions for the FreshGrad HTTP API.
//!
//! All API routes are organized by domain and mounted under `/api`.
//! Unmatched `/api/*` paths produce a JSON 404; every other path falls
//! through to the bundled single-page front end.

use std::path::Path;

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::error::ApiErrorResponse;
use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(candidate_routes())
        .merge(course_routes())
        .merge(mentor_routes())
        .merge(correction_routes())
        .merge(notification_routes())
        .merge(audit_routes())
        .merge(reference_routes())
        .fallback(api_not_found);

    let static_dir = Path::new(&state.config.server.static_dir);
    let spa = ServeDir::new(static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api", api_routes)
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// JSON 404 for unmatched API paths, so SPA HTML never leaks into `/api`.
async fn api_not_found() -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorResponse {
            error: "NOT_FOUND".to_string(),
            message: "Unknown API route".to_string(),
        }),
    )
}

/// Registration and login.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/users/auth/register", post(handlers::auth::register))
        .route("/users/auth/login", post(handlers::auth::login))
}

/// User administration, keyed by email.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users/{email}", put(handlers::user::update_user))
        .route("/users/{email}", delete(handlers::user::delete_user))
}

/// Candidate CRUD.
fn candidate_routes() -> Router<AppState> {
    Router::new()
        .route("/candidates", get(handlers::candidate::list_candidates))
        .route("/candidates", post(handlers::candidate::create_candidate))
        .route("/candidates/{id}", get(handlers::candidate::get_candidate))
        .route(
            "/candidates/{id}",
            put(handlers::candidate::update_candidate),
        )
        .route(
            "/candidates/{id}",
            delete(handlers::candidate::delete_candidate),
        )
}

/// Course catalogue.
fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(handlers::course::list_courses))
        .route("/courses", post(handlers::course::create_course))
        .route("/courses/{id}", put(handlers::course::update_course))
        .route("/courses/{id}", delete(handlers::course::delete_course))
}

/// Mentor registry.
fn mentor_routes() -> Router<AppState> {
    Router::new()
        .route("/mentors", get(handlers::mentor::list_mentors))
        .route("/mentors", post(handlers::mentor::create_mentor))
        .route("/mentors/{id}", put(handlers::mentor::update_mentor))
        .route("/mentors/{id}", delete(handlers::mentor::delete_mentor))
}

/// Correction workflow.
fn correction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/candidates/{id}/corrections",
            get(handlers::correction::list_candidate_corrections),
        )
        .route(
            "/candidates/{id}/corrections",
            post(handlers::correction::create_correction),
        )
        .route("/corrections", get(handlers::correction::list_corrections))
        .route(
            "/corrections/{id}/resolve",
            put(handlers::correction::resolve_correction),
        )
        .route(
            "/corrections/{id}/reject",
            put(handlers::correction::reject_correction),
        )
        .route(
            "/corrections/{id}/respond",
            put(handlers::correction::respond_correction),
        )
}

/// Notification log.
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications",
            post(handlers::notification::create_notification),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
}

/// Audit log.
fn audit_routes() -> Router<AppState> {
    Router::new()
        .route("/audit", get(handlers::audit::list_audit))
        .route("/audit", post(handlers::audit::append_audit))
}

/// Static reference data.
fn reference_routes() -> Router<AppState> {
    Router::new()
        .route("/reference/tracks", get(handlers::reference::list_tracks))
        .route(
            "/reference/statuses",
            get(handlers::reference::list_statuses),
        )
}

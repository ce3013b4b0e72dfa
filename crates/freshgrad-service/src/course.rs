//! Course catalogue operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use freshgrad_core::error::AppError;
use freshgrad_core::result::AppResult;
use freshgrad_core::types::id;
use freshgrad_database::repositories::course::CourseRepository;
use freshgrad_entity::candidate::TrackId;
use freshgrad_entity::course::Course;

/// Fields accepted when creating a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseInput {
    /// Unique course code (required).
    pub code: String,
    /// Course title (required).
    pub title: String,
    /// Score aggregation weight; defaults to 1.0.
    #[serde(default)]
    pub weight: Option<f64>,
    /// Minimum passing score; defaults to 70.
    #[serde(default)]
    pub pass_threshold: Option<f64>,
    /// Whether the course is mandatory; defaults to false.
    #[serde(default)]
    pub is_required: Option<bool>,
    /// Tracks the course applies to; defaults to none.
    #[serde(default)]
    pub track_ids: Vec<TrackId>,
}

/// Fields accepted when updating a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseInput {
    /// New course code.
    #[serde(default)]
    pub code: Option<String>,
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New weight.
    #[serde(default)]
    pub weight: Option<f64>,
    /// New pass threshold.
    #[serde(default)]
    pub pass_threshold: Option<f64>,
    /// New required flag.
    #[serde(default)]
    pub is_required: Option<bool>,
    /// Replacement track set.
    #[serde(default)]
    pub track_ids: Option<Vec<TrackId>>,
    /// Reactivate or deactivate.
    #[serde(default)]
    pub active: Option<bool>,
}

/// Handles the course catalogue.
#[derive(Clone)]
pub struct CourseService {
    course_repo: Arc<CourseRepository>,
}

impl CourseService {
    /// Creates a new course service.
    pub fn new(course_repo: Arc<CourseRepository>) -> Self {
        Self { course_repo }
    }

    /// Create a course with documented defaults.
    pub async fn create(&self, input: CreateCourseInput) -> AppResult<Course> {
        if input.code.trim().is_empty() || input.title.trim().is_empty() {
            return Err(AppError::validation("Course code and title are required"));
        }

        let course = Course {
            id: id::prefixed_id(id::COURSE_PREFIX),
            code: input.code,
            title: input.title,
            weight: input.weight.unwrap_or(1.0),
            pass_threshold: input.pass_threshold.unwrap_or(70.0),
            is_required: input.is_required.unwrap_or(false),
            track_ids: input.track_ids,
            active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let created = self.course_repo.create(&course).await?;
        info!(id = %created.id, code = %created.code, "Course created");
        Ok(created)
    }

    /// List active courses ordered by code.
    pub async fn list_active(&self) -> AppResult<Vec<Course>> {
        self.course_repo.find_active().await
    }

    /// Apply a partial update.
    pub async fn update(&self, id: &str, input: UpdateCourseInput) -> AppResult<Course> {
        let mut course = self
            .course_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Course '{id}' not found")))?;

        if let Some(code) = input.code {
            course.code = code;
        }
        if let Some(title) = input.title {
            course.title = title;
        }
        if let Some(weight) = input.weight {
            course.weight = weight;
        }
        if let Some(pass_threshold) = input.pass_threshold {
            course.pass_threshold = pass_threshold;
        }
        if let Some(is_required) = input.is_required {
            course.is_required = is_required;
        }
        if let Some(track_ids) = input.track_ids {
            course.track_ids = track_ids;
        }
        if let Some(active) = input.active {
            course.active = active;
        }

        self.course_repo.update(&course).await
    }

    /// Soft-delete: flip the active flag; historical enrollments keep
    /// referencing the course.
    pub async fn deactivate(&self, id: &str) -> AppResult<()> {
        if !self.course_repo.deactivate(id).await? {
            return Err(AppError::not_found(format!("Course '{id}' not found")));
        }
        info!(id, "Course deactivated");
        Ok(())
    }
}

//! Course repository implementation.

use sqlx::PgPool;

use freshgrad_core::error::{AppError, ErrorKind};
use freshgrad_core::result::AppResult;
use freshgrad_entity::course::Course;

/// Repository for course CRUD operations.
///
/// Courses are never hard-deleted; `deactivate` clears the active flag so
/// historical enrollments keep a valid reference.
#[derive(Debug, Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    /// Create a new course repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active courses ordered by code.
    pub async fn find_active(&self) -> AppResult<Vec<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE active ORDER BY code ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list courses", e))
    }

    /// Find a course by id regardless of active flag.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find course", e))
    }

    /// Insert a new course; a duplicate code maps to a Conflict error.
    pub async fn create(&self, course: &Course) -> AppResult<Course> {
        sqlx::query_as::<_, Course>(
            "INSERT INTO courses (id, code, title, weight, pass_threshold, is_required, track_ids, active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&course.id)
        .bind(&course.code)
        .bind(&course.title)
        .bind(course.weight)
        .bind(course.pass_threshold)
        .bind(course.is_required)
        .bind(&course.track_ids)
        .bind(course.active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("courses_code_key") =>
            {
                AppError::conflict(format!("Course code '{}' already exists", course.code))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create course", e),
        })
    }

    /// Overwrite a course's mutable fields.
    pub async fn update(&self, course: &Course) -> AppResult<Course> {
        sqlx::query_as::<_, Course>(
            "UPDATE courses SET code = $2, title = $3, weight = $4, pass_threshold = $5, \
                                is_required = $6, track_ids = $7, active = $8, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(&course.id)
        .bind(&course.code)
        .bind(&course.title)
        .bind(course.weight)
        .bind(course.pass_threshold)
        .bind(course.is_required)
        .bind(&course.track_ids)
        .bind(course.active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("courses_code_key") =>
            {
                AppError::conflict(format!("Course code '{}' already exists", course.code))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update course", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Course '{}' not found", course.id)))
    }

    /// Soft-delete: clear the active flag.
    pub async fn deactivate(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("UPDATE courses SET active = FALSE, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to deactivate course", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

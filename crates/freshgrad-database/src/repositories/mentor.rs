//! Mentor repository implementation.

use sqlx::PgPool;

use freshgrad_core::error::{AppError, ErrorKind};
use freshgrad_core::result::AppResult;
use freshgrad_entity::mentor::Mentor;

/// Repository for mentor CRUD operations.
#[derive(Debug, Clone)]
pub struct MentorRepository {
    pool: PgPool,
}

impl MentorRepository {
    /// Create a new mentor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all mentors, alphabetical by name.
    pub async fn find_all(&self) -> AppResult<Vec<Mentor>> {
        sqlx::query_as::<_, Mentor>("SELECT * FROM mentors ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list mentors", e))
    }

    /// Find a mentor by id.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Mentor>> {
        sqlx::query_as::<_, Mentor>("SELECT * FROM mentors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find mentor", e))
    }

    /// Insert a new mentor.
    pub async fn create(&self, mentor: &Mentor) -> AppResult<Mentor> {
        sqlx::query_as::<_, Mentor>(
            "INSERT INTO mentors (id, name, email, mobile, subject, school, emirate) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(&mentor.id)
        .bind(&mentor.name)
        .bind(&mentor.email)
        .bind(&mentor.mobile)
        .bind(&mentor.subject)
        .bind(&mentor.school)
        .bind(&mentor.emirate)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create mentor", e))
    }

    /// Overwrite a mentor's mutable fields.
    pub async fn update(&self, mentor: &Mentor) -> AppResult<Mentor> {
        sqlx::query_as::<_, Mentor>(
            "UPDATE mentors SET name = $2, email = $3, mobile = $4, subject = $5, \
                                school = $6, emirate = $7 \
             WHERE id = $1 RETURNING *",
        )
        .bind(&mentor.id)
        .bind(&mentor.name)
        .bind(&mentor.email)
        .bind(&mentor.mobile)
        .bind(&mentor.subject)
        .bind(&mentor.school)
        .bind(&mentor.emirate)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update mentor", e))?
        .ok_or_else(|| AppError::not_found(format!("Mentor '{}' not found", mentor.id)))
    }

    /// Hard-delete a mentor by id.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM mentors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete mentor", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

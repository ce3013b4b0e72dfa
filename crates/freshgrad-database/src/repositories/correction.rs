//! Correction repository implementation.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use freshgrad_core::error::{AppError, ErrorKind};
use freshgrad_core::result::AppResult;
use freshgrad_entity::correction::{Correction, CorrectionResponse, CorrectionStatus};

/// Repository for correction workflow records.
#[derive(Debug, Clone)]
pub struct CorrectionRepository {
    pool: PgPool,
}

impl CorrectionRepository {
    /// Create a new correction repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all corrections, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Correction>> {
        sqlx::query_as::<_, Correction>("SELECT * FROM corrections ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list corrections", e)
            })
    }

    /// List corrections raised against one candidate, newest first.
    pub async fn find_by_candidate(&self, candidate_id: &str) -> AppResult<Vec<Correction>> {
        sqlx::query_as::<_, Correction>(
            "SELECT * FROM corrections WHERE candidate_id = $1 ORDER BY created_at DESC",
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list corrections", e))
    }

    /// Find one correction by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Correction>> {
        sqlx::query_as::<_, Correction>("SELECT * FROM corrections WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find correction", e)
            })
    }

    /// Insert a new correction in the Pending state.
    pub async fn create(&self, correction: &Correction) -> AppResult<Correction> {
        sqlx::query_as::<_, Correction>(
            "INSERT INTO corrections (id, candidate_id, text, from_user, from_role, target_role, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(correction.id)
        .bind(&correction.candidate_id)
        .bind(&correction.text)
        .bind(&correction.from_user)
        .bind(correction.from_role)
        .bind(correction.target_role)
        .bind(correction.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create correction", e)
        })
    }

    /// Set a correction's workflow state. Last write wins; no guard.
    pub async fn set_status(
        &self,
        id: Uuid,
        status: CorrectionStatus,
        reject_reason: Option<&str>,
        response: Option<&CorrectionResponse>,
    ) -> AppResult<Correction> {
        sqlx::query_as::<_, Correction>(
            "UPDATE corrections SET status = $2, \
                                    reject_reason = COALESCE($3, reject_reason), \
                                    response = COALESCE($4, response), \
                                    updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(reject_reason)
        .bind(response.map(|r| Json(r.clone())))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update correction", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Correction '{id}' not found")))
    }
}

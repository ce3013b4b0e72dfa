//! Reference data repository implementation.
//!
//! Tracks and status metadata are seeded once by migration and read-only
//! at runtime.

use sqlx::PgPool;

use freshgrad_core::error::{AppError, ErrorKind};
use freshgrad_core::result::AppResult;
use freshgrad_entity::reference::{StatusMeta, Track};

/// Read-only access to the static reference tables.
#[derive(Debug, Clone)]
pub struct ReferenceRepository {
    pool: PgPool,
}

impl ReferenceRepository {
    /// Create a new reference repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the three training tracks.
    pub async fn tracks(&self) -> AppResult<Vec<Track>> {
        sqlx::query_as::<_, Track>("SELECT * FROM tracks ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tracks", e))
    }

    /// List candidate status metadata in display order.
    pub async fn status_meta(&self) -> AppResult<Vec<StatusMeta>> {
        sqlx::query_as::<_, StatusMeta>(
            "SELECT * FROM candidate_status_meta ORDER BY display_order",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list status metadata", e))
    }
}

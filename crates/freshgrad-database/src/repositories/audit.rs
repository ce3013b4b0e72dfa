//! Audit log repository implementation.

use sqlx::PgPool;

use freshgrad_core::error::{AppError, ErrorKind};
use freshgrad_core::result::AppResult;
use freshgrad_entity::audit::AuditEntry;

/// Repository for the append-only, immutable audit log.
#[derive(Debug, Clone)]
pub struct AuditRepository {
    pool: PgPool,
}

impl AuditRepository {
    /// Create a new audit repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List audit entries, newest first, optionally filtered by event type.
    pub async fn find_all(&self, event_type: Option<&str>) -> AppResult<Vec<AuditEntry>> {
        sqlx::query_as::<_, AuditEntry>(
            "SELECT * FROM audit_log \
             WHERE ($1::TEXT IS NULL OR event_type = $1) \
             ORDER BY created_at DESC",
        )
        .bind(event_type)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list audit entries", e))
    }

    /// Append an audit entry. Entries are immutable once written.
    pub async fn append(&self, entry: &AuditEntry) -> AppResult<AuditEntry> {
        sqlx::query_as::<_, AuditEntry>(
            "INSERT INTO audit_log (id, event_type, payload) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(entry.id)
        .bind(&entry.event_type)
        .bind(&entry.payload)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to append audit entry", e))
    }
}

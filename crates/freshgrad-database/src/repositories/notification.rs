//! Notification repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use freshgrad_core::error::{AppError, ErrorKind};
use freshgrad_core::result::AppResult;
use freshgrad_entity::notification::Notification;
use freshgrad_entity::user::UserRole;

/// Repository for the append-only notification log.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List notifications addressed to an email and/or a role, newest
    /// first. With no filter, lists everything.
    pub async fn find_addressed(
        &self,
        email: Option<&str>,
        role: Option<UserRole>,
    ) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications \
             WHERE ($1::TEXT IS NULL OR LOWER(email) = LOWER($1)) \
               AND ($2::user_role IS NULL OR role = $2) \
             ORDER BY created_at DESC",
        )
        .bind(email)
        .bind(role)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))
    }

    /// Append a notification.
    pub async fn create(&self, notification: &Notification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (id, email, role, kind, title, body, target, read) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(notification.id)
        .bind(&notification.email)
        .bind(notification.role)
        .bind(&notification.kind)
        .bind(&notification.title)
        .bind(&notification.body)
        .bind(&notification.target)
        .bind(notification.read)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create notification", e)
        })
    }

    /// Mark a notification as read. The read flag is the only mutable
    /// field of a notification.
    pub async fn mark_read(&self, id: Uuid) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "UPDATE notifications SET read = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark notification read", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Notification '{id}' not found")))
    }
}

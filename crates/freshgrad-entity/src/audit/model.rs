//! Audit log entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// One append-only audit log entry. Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    /// Internal identifier.
    pub id: Uuid,
    /// Event type tag (e.g. "candidate.statusChanged").
    pub event_type: String,
    /// Arbitrary event payload.
    pub payload: Json<Value>,
    /// When the event was recorded.
    pub created_at: DateTime<Utc>,
}

//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::user::role::UserRole;

/// A workflow notification addressed to an email, a role, or both.
///
/// Append-only log semantics: the read flag is the only mutable field.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Internal identifier.
    pub id: Uuid,
    /// Addressed user email, if any.
    pub email: Option<String>,
    /// Addressed role, if any.
    pub role: Option<UserRole>,
    /// Type tag (e.g. "correction", "statusChange").
    #[serde(rename = "type")]
    pub kind: String,
    /// Short title.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Arbitrary target payload (which page/candidate the event concerns).
    pub target: Json<Value>,
    /// Whether the notification has been read.
    pub read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

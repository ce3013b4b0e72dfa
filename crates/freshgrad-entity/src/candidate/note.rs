//! Candidate notes thread.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One note in a candidate's chronological notes thread.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Server-assigned identifier.
    #[serde(default)]
    pub id: Uuid,
    /// Note body.
    pub text: String,
    /// Author name or email.
    pub author: String,
    /// Author role at the time of writing.
    pub role: String,
    /// When the note was written.
    #[serde(rename = "timestamp", default = "Utc::now")]
    #[sqlx(rename = "created_at")]
    pub created_at: DateTime<Utc>,
}

//! Mentor entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A school mentor referenced by candidate enrollments.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    /// Typed-prefix string id (`M-...`).
    pub id: String,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Mobile number.
    pub mobile: Option<String>,
    /// Mentoring subject.
    pub subject: Option<String>,
    /// School the mentor teaches at.
    pub school: Option<String>,
    /// Emirate of the school.
    pub emirate: Option<String>,
    /// When the mentor was registered.
    pub created_at: DateTime<Utc>,
}

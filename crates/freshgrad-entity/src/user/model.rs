//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user of the FreshGrad system.
///
/// Email is the external key; it is stored lower-cased and all lookups are
/// case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Internal identifier.
    pub id: Uuid,
    /// Unique email address (lower-cased).
    pub email: String,
    /// Display name.
    pub name: String,
    /// Argon2id password hash. Never serialized.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Role within the program.
    pub role: UserRole,
    /// Whether the account has been verified.
    pub verified: bool,
    /// Free-form applicant status, if the user is also an applicant.
    pub applicant_status: Option<String>,
    /// Free-form document map (uploaded document names to URLs/metadata).
    pub documents: Json<Map<String, Value>>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

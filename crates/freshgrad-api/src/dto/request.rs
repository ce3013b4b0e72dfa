//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use freshgrad_entity::user::UserRole;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Email, the account key.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Plaintext password, hashed before storage.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Role; defaults to teacher when absent.
    #[serde(default)]
    pub role: Option<UserRole>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Correction rejection request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectCorrectionRequest {
    /// Why the correction was refused. Required.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Notification creation request body. At least one addressee (email or
/// role) must be present.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    /// Addressed user email.
    #[serde(default)]
    pub email: Option<String>,
    /// Addressed role.
    #[serde(default)]
    pub role: Option<UserRole>,
    /// Type tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub body: String,
    /// Arbitrary target payload.
    #[serde(default)]
    pub target: Option<Value>,
}

/// Audit entry creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuditRequest {
    /// Event type tag.
    #[validate(length(min = 1, message = "Event type is required"))]
    pub event_type: String,
    /// Arbitrary event payload.
    #[serde(default)]
    pub payload: Option<Value>,
}

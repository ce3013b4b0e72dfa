//! Response DTOs.
//!
//! Entities serialize straight to their wire shape, so most endpoints
//! return them directly; the types here cover the few composite or
//! message-only responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use freshgrad_entity::user::User;

/// Login response: the authenticated profile plus a signed access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Authenticated user profile. The password hash is never serialized.
    pub user: User,
    /// Signed JWT access token.
    pub access_token: String,
    /// Access token expiration.
    pub expires_at: DateTime<Utc>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Database reachability.
    pub database: String,
    /// Server version.
    pub version: String,
}

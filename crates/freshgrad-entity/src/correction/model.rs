//! Correction entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::user::role::UserRole;

use super::status::CorrectionStatus;

/// A cross-role data-dispute request attached to a candidate record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Correction {
    /// Internal identifier.
    pub id: Uuid,
    /// Candidate the dispute concerns; cascade-deleted with the candidate.
    pub candidate_id: String,
    /// Dispute text.
    pub text: String,
    /// Originating user (email or name).
    pub from_user: String,
    /// Role of the originator.
    pub from_role: UserRole,
    /// Role expected to act on the request.
    pub target_role: UserRole,
    /// Workflow state.
    pub status: CorrectionStatus,
    /// Reason given when rejecting; required for `Rejected`.
    pub reject_reason: Option<String>,
    /// Attached response, set by the `Responded` transition.
    pub response: Option<Json<CorrectionResponse>>,
    /// When the correction was raised.
    pub created_at: DateTime<Utc>,
    /// When the correction was last acted on.
    pub updated_at: DateTime<Utc>,
}

/// Response object attached by the target role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionResponse {
    /// Responding user (email or name).
    pub author: String,
    /// Role of the responder.
    pub role: UserRole,
    /// Response text.
    pub text: String,
    /// When the response was written.
    pub timestamp: DateTime<Utc>,
}

//! Reference data models.
//!
//! Seeded once by migration and treated as read-only configuration.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::candidate::status::CandidateStatus;
use crate::candidate::track::TrackId;

/// A training track row from the static `tracks` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Track identifier.
    pub id: TrackId,
    /// Display name.
    pub name: String,
    /// Minimum passing course average, as a percentage.
    pub min_passing_avg: f64,
}

/// Candidate status metadata row from the static `candidate_status_meta`
/// table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StatusMeta {
    /// The status.
    pub status: CandidateStatus,
    /// Position in the fixed display sequence.
    pub display_order: i32,
    /// Coarse workflow phase index (0..=4).
    pub stage: i32,
    /// Display styling tag.
    pub color: String,
}

//! Course entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::candidate::track::TrackId;

/// A training course.
///
/// Courses are never hard-deleted: deactivation clears `active`, which
/// removes the course from default listings while historical enrollments
/// keep referencing it by code.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Typed-prefix string id (`CR-...`).
    pub id: String,
    /// Unique course code.
    pub code: String,
    /// Course title.
    pub title: String,
    /// Multiplier applied when aggregating scores.
    pub weight: f64,
    /// Minimum passing score, as a percentage.
    pub pass_threshold: f64,
    /// Whether the course is mandatory for its tracks.
    pub is_required: bool,
    /// Tracks the course applies to.
    pub track_ids: Vec<TrackId>,
    /// Soft-delete marker; false excludes the course from default listings.
    pub active: bool,
    /// When the course was created.
    pub created_at: DateTime<Utc>,
    /// When the course was last updated.
    pub updated_at: DateTime<Utc>,
}

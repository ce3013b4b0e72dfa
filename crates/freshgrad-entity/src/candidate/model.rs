//! Candidate entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use sqlx::types::Json;

use super::enrollment::Enrollment;
use super::note::Note;
use super::result::CourseResult;
use super::sponsor::Sponsor;
use super::status::CandidateStatus;
use super::track::TrackId;

/// A teacher-candidate tracked through the FreshGrad lifecycle.
///
/// Child collections (enrollments, results, notes) live in their own tables
/// and cascade-delete with the candidate; the repository populates them
/// after the row fetch, so they are skipped by `FromRow`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Typed-prefix string id (`C-...`).
    pub id: String,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Mobile number.
    pub mobile: Option<String>,
    /// National id number.
    pub national_id: Option<String>,
    /// Emirate of residence.
    pub emirate: Option<String>,
    /// Teaching subject.
    pub subject: Option<String>,
    /// Grade point average; null in storage reads back as 0.
    pub gpa: f64,
    /// Assigned training track.
    pub track_id: TrackId,
    /// Lifecycle status.
    pub status: CandidateStatus,
    /// Funding body, if any.
    pub sponsor: Option<Sponsor>,
    /// Extension attributes not covered by fixed columns, kept separate
    /// from core fields so extension keys can never shadow them.
    pub extra: Json<Map<String, Value>>,
    /// When the candidate was imported.
    pub created_at: DateTime<Utc>,
    /// When the candidate was last updated.
    pub updated_at: DateTime<Utc>,

    /// Ordered enrollment list.
    #[sqlx(skip)]
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
    /// Course results.
    #[sqlx(skip)]
    #[serde(default)]
    pub course_results: Vec<CourseResult>,
    /// Chronological notes thread.
    #[sqlx(skip)]
    #[serde(default)]
    pub notes: Vec<Note>,
}

//! Candidate course result.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Score and pass flag for one course taken by a candidate.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CourseResult {
    /// Server-assigned identifier.
    #[serde(default)]
    pub id: Uuid,
    /// Code of the course the result belongs to.
    pub course_code: String,
    /// Achieved score, as a percentage.
    pub score: f64,
    /// Whether the score met the course pass threshold.
    pub passed: bool,
}

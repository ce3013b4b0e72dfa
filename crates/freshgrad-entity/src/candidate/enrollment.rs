//! Candidate course enrollment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One entry in a candidate's ordered enrollment list.
///
/// References a course by code and optionally a mentor by id; the mentor is
/// referenced, not owned. `id` is server-assigned and defaults to nil when
/// the enrollment arrives in a request payload.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// Server-assigned identifier.
    #[serde(default)]
    pub id: Uuid,
    /// Code of the enrolled course.
    pub course_code: String,
    /// Enrollment start date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Enrollment end date.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Free-form enrollment status (e.g. "enrolled", "completed").
    #[serde(default)]
    pub status: Option<String>,
    /// Assigned mentor, if any.
    #[serde(default)]
    pub mentor_id: Option<String>,
    /// Internship placement school, if any.
    #[serde(default)]
    pub internship_school: Option<String>,
    /// Emirate of the internship placement.
    #[serde(default)]
    pub internship_emirate: Option<String>,
    /// Position in the candidate's ordered enrollment list.
    #[serde(default)]
    pub position: i32,
}

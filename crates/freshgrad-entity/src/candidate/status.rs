//! Candidate lifecycle status enumeration.
//!
//! Twelve statuses with a fixed display order and a coarser five-phase
//! "stage index" used by the front end to group statuses visually.
//! Transitions are unconstrained at the data layer; sequencing rules are a
//! client-side policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a candidate, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "candidate_status")]
pub enum CandidateStatus {
    /// Freshly imported from a cohort sheet.
    Imported,
    /// Passed the eligibility screen.
    Eligible,
    /// Failed the eligibility screen.
    Ineligible,
    /// Assigned to a course plan.
    #[serde(rename = "Courses Assigned")]
    #[sqlx(rename = "Courses Assigned")]
    CoursesAssigned,
    /// Currently attending training.
    #[serde(rename = "In Training")]
    #[sqlx(rename = "In Training")]
    InTraining,
    /// Finished all assigned courses.
    #[serde(rename = "Courses Completed")]
    #[sqlx(rename = "Courses Completed")]
    CoursesCompleted,
    /// Final assessment recorded.
    Assessed,
    /// Met the graduation bar.
    Graduated,
    /// Missed the graduation bar.
    #[serde(rename = "Not Graduated")]
    #[sqlx(rename = "Not Graduated")]
    NotGraduated,
    /// Graduated, awaiting school placement.
    #[serde(rename = "Placement Pending")]
    #[sqlx(rename = "Placement Pending")]
    PlacementPending,
    /// Hired by a school.
    Hired,
    /// Left the program.
    Withdrawn,
}

impl CandidateStatus {
    /// All statuses in display order.
    pub const ALL: [CandidateStatus; 12] = [
        Self::Imported,
        Self::Eligible,
        Self::Ineligible,
        Self::CoursesAssigned,
        Self::InTraining,
        Self::CoursesCompleted,
        Self::Assessed,
        Self::Graduated,
        Self::NotGraduated,
        Self::PlacementPending,
        Self::Hired,
        Self::Withdrawn,
    ];

    /// Position in the fixed display sequence.
    pub fn display_order(&self) -> i32 {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0) as i32
    }

    /// Coarse workflow phase (0..=4) this status belongs to.
    pub fn stage(&self) -> i32 {
        match self {
            Self::Imported | Self::Eligible | Self::Ineligible => 0,
            Self::CoursesAssigned => 1,
            Self::InTraining | Self::CoursesCompleted | Self::Assessed => 2,
            Self::Graduated | Self::NotGraduated => 3,
            Self::PlacementPending | Self::Hired | Self::Withdrawn => 4,
        }
    }

    /// Display styling tag used by the front end.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Imported => "gray",
            Self::Eligible => "blue",
            Self::Ineligible => "red",
            Self::CoursesAssigned => "indigo",
            Self::InTraining => "amber",
            Self::CoursesCompleted => "teal",
            Self::Assessed => "cyan",
            Self::Graduated => "green",
            Self::NotGraduated => "red",
            Self::PlacementPending => "amber",
            Self::Hired => "green",
            Self::Withdrawn => "gray",
        }
    }

    /// Canonical display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Imported => "Imported",
            Self::Eligible => "Eligible",
            Self::Ineligible => "Ineligible",
            Self::CoursesAssigned => "Courses Assigned",
            Self::InTraining => "In Training",
            Self::CoursesCompleted => "Courses Completed",
            Self::Assessed => "Assessed",
            Self::Graduated => "Graduated",
            Self::NotGraduated => "Not Graduated",
            Self::PlacementPending => "Placement Pending",
            Self::Hired => "Hired",
            Self::Withdrawn => "Withdrawn",
        }
    }
}

impl Default for CandidateStatus {
    fn default() -> Self {
        Self::Imported
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CandidateStatus {
    type Err = freshgrad_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                freshgrad_core::AppError::validation(format!("Invalid candidate status: '{s}'"))
            })
    }
}

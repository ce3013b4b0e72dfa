//! Training track enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three fixed training curricula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "track_id", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TrackId {
    /// STEM Core curriculum.
    T1,
    /// Languages curriculum.
    T2,
    /// ICT curriculum.
    T3,
}

impl TrackId {
    /// Display name of the track.
    pub fn name(&self) -> &'static str {
        match self {
            Self::T1 => "STEM Core",
            Self::T2 => "Languages",
            Self::T3 => "ICT",
        }
    }

    /// Minimum passing course average for the track, as a percentage.
    pub fn min_passing_avg(&self) -> f64 {
        match self {
            Self::T1 => 75.0,
            Self::T2 | Self::T3 => 70.0,
        }
    }

    /// Canonical id string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::T1 => "t1",
            Self::T2 => "t2",
            Self::T3 => "t3",
        }
    }
}

impl Default for TrackId {
    fn default() -> Self {
        Self::T1
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrackId {
    type Err = freshgrad_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "t1" => Ok(Self::T1),
            "t2" => Ok(Self::T2),
            "t3" => Ok(Self::T3),
            _ => Err(freshgrad_core::AppError::validation(format!(
                "Invalid track id: '{s}'. Expected one of: t1, t2, t3"
            ))),
        }
    }
}

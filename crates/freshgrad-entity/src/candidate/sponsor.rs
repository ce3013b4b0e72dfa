//! Candidate sponsor enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Funding/oversight body for a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "sponsor", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Sponsor {
    /// Ministry of Education.
    Moe,
    /// Abu Dhabi Department of Education and Knowledge.
    Adek,
    /// Knowledge and Human Development Authority (Dubai).
    Khda,
}

impl Sponsor {
    /// Full display name of the sponsoring body.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Moe => "Ministry of Education",
            Self::Adek => "ADEK",
            Self::Khda => "KHDA",
        }
    }
}

impl fmt::Display for Sponsor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

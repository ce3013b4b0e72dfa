//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the FreshGrad program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role")]
pub enum UserRole {
    /// Full system administrator.
    Admin,
    /// Program manager overseeing cohorts.
    Manager,
    /// Trainer delivering courses and assessments.
    Trainer,
    /// Auditor with review access to candidate records.
    Auditor,
    /// A teacher-candidate's own account.
    Teacher,
}

impl UserRole {
    /// Return the role as its canonical string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Trainer => "Trainer",
            Self::Auditor => "Auditor",
            Self::Teacher => "Teacher",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = freshgrad_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "trainer" => Ok(Self::Trainer),
            "auditor" => Ok(Self::Auditor),
            "teacher" => Ok(Self::Teacher),
            _ => Err(freshgrad_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: Admin, Manager, Trainer, Auditor, Teacher"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("TRAINER".parse::<UserRole>().unwrap(), UserRole::Trainer);
        assert!("principal".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&UserRole::Auditor).unwrap();
        assert_eq!(json, "\"Auditor\"");
    }
}

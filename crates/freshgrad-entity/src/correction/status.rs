//! Correction workflow state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a correction request.
///
/// `Pending → {Resolved, Rejected, Responded}`; `Responded` is a
/// non-terminal acknowledgment and may later move to `Resolved` or
/// `Rejected`. `Resolved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "correction_status")]
pub enum CorrectionStatus {
    /// Raised, awaiting action by the target role.
    Pending,
    /// Closed: the dispute was accepted and fixed.
    Resolved,
    /// Closed: the dispute was declined (requires a reject reason).
    Rejected,
    /// Acknowledged with a response; still open.
    Responded,
}

impl CorrectionStatus {
    /// Whether no further transitions are allowed from this state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved | Self::Rejected)
    }

    /// Whether a transition to `next` is allowed.
    pub fn can_transition_to(&self, next: CorrectionStatus) -> bool {
        match self {
            Self::Pending => matches!(next, Self::Resolved | Self::Rejected | Self::Responded),
            Self::Responded => matches!(next, Self::Resolved | Self::Rejected),
            Self::Resolved | Self::Rejected => false,
        }
    }

    /// Canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Resolved => "Resolved",
            Self::Rejected => "Rejected",
            Self::Responded => "Responded",
        }
    }
}

impl fmt::Display for CorrectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

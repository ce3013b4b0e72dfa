//! Typed-prefix string identifiers.
//!
//! External candidate, course, and mentor ids keep the historical
//! `PREFIX-<suffix>` string contract, but the suffix is a random UUID
//! rather than an epoch timestamp, so concurrent creations cannot collide.

use uuid::Uuid;

/// Prefix for candidate ids (`C-...`).
pub const CANDIDATE_PREFIX: &str = "C";
/// Prefix for course ids (`CR-...`).
pub const COURSE_PREFIX: &str = "CR";
/// Prefix for mentor ids (`M-...`).
pub const MENTOR_PREFIX: &str = "M";

/// Generate a new typed-prefix identifier, e.g. `C-0193b2...`.
pub fn prefixed_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

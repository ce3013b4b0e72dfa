//! # freshgrad-service
//!
//! Business services composing the repositories: default substitution on
//! create, patch application on update, the correction workflow, and the
//! notification/audit events those operations emit.

pub mod candidate;
pub mod correction;
pub mod course;
pub mod mentor;
pub mod user;

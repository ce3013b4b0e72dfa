//! Shared types used across the FreshGrad crates.

pub mod id;
pub mod patch;

pub use id::prefixed_id;
pub use patch::Patch;

//! Mentor domain entities.

pub mod model;

pub use model::Mentor;

//! Concrete repository implementations, one per entity family.

pub mod audit;
pub mod candidate;
pub mod correction;
pub mod course;
pub mod mentor;
pub mod notification;
pub mod reference;
pub mod user;

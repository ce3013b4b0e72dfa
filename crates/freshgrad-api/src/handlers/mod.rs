//! Route handlers organized by domain.

pub mod audit;
pub mod auth;
pub mod candidate;
pub mod correction;
pub mod course;
pub mod health;
pub mod mentor;
pub mod notification;
pub mod reference;
pub mod user;

//! # freshgrad-entity
//!
//! Domain entity models and enums for the FreshGrad backend.
//!
//! Entities carry `#[serde(rename_all = "camelCase")]` so the external JSON
//! contract is camelCase while storage columns (matched by `FromRow` field
//! names) stay snake_case.

pub mod audit;
pub mod candidate;
pub mod correction;
pub mod course;
pub mod mentor;
pub mod notification;
pub mod reference;
pub mod user;

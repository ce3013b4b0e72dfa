//! # freshgrad-api
//!
//! HTTP API layer for FreshGrad built on Axum.
//!
//! Provides all REST endpoints, DTOs, error mapping, and the SPA static
//! file fallback.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;

//! # freshgrad-core
//!
//! Core crate for the FreshGrad backend. Contains configuration schemas,
//! shared types (typed-prefix identifiers, partial-update patch semantics),
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other FreshGrad crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;

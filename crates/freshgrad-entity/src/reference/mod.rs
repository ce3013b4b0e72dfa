//! Static reference data entities.

pub mod model;

pub use model::{StatusMeta, Track};

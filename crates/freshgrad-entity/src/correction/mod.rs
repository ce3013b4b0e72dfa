//! Correction workflow entities.

pub mod model;
pub mod status;

pub use model::{Correction, CorrectionResponse};
pub use status::CorrectionStatus;

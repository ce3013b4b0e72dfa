//! Candidate domain entities.

pub mod enrollment;
pub mod model;
pub mod note;
pub mod result;
pub mod sponsor;
pub mod status;
pub mod track;

pub use enrollment::Enrollment;
pub use model::Candidate;
pub use note::Note;
pub use result::CourseResult;
pub use sponsor::Sponsor;
pub use status::CandidateStatus;
pub use track::TrackId;

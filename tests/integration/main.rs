//! Integration test suite.
//!
//! Each module exercises one API domain end to end against a disposable
//! PostgreSQL database configured in `config/test.toml`.

mod helpers;

mod audit_test;
mod auth_test;
mod candidate_test;
mod correction_test;
mod course_test;
mod mentor_test;
mod notification_test;
mod reference_test;

//! # freshgrad-auth
//!
//! Argon2id password hashing and JWT access token issuance/validation.
//!
//! Passwords are stored as salted one-way hashes and verified in constant
//! time; logins are exchanged for signed access tokens.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;

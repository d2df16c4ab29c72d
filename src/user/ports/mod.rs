//! Port contracts for user accounts.
//!
//! Persistence and password hashing are both supplied from outside the
//! crate through these traits.

pub mod hasher;
pub mod repository;

pub use hasher::{PasswordHasher, PasswordHasherError};
pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};

//! Password hashing port.

use crate::user::domain::PasswordHash;
use thiserror::Error;

/// One-way password hashing contract.
///
/// Implementations own the algorithm and its parameters; the crate never
/// inspects the encoded hash.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plain password.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordHasherError`] when the hasher cannot produce a hash.
    fn hash(&self, plain: &str) -> Result<PasswordHash, PasswordHasherError>;

    /// Returns `true` when `plain` matches `hash`.
    fn verify(&self, plain: &str, hash: &PasswordHash) -> bool;
}

/// Error returned when a password cannot be hashed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("password hashing failed: {0}")]
pub struct PasswordHasherError(pub String);

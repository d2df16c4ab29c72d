//! Domain model for user accounts.
//!
//! Accounts carry the credentials and roles an [`Actor`] is projected from.
//! Password hashing itself happens behind the
//! [`PasswordHasher`](crate::user::ports::PasswordHasher) port; the domain
//! only sees opaque hashes.

mod error;
mod identity;
mod password;
mod user;

pub use crate::security::{Actor, UserId};
pub use error::UserDomainError;
pub use identity::{EmailAddress, Username};
pub use password::{PasswordHash, PasswordPolicy};
pub use user::{PersistedUserData, User};

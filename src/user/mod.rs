//! User accounts: registration, login and administration.
//!
//! Registering an account validates its identity fields and hashes the
//! password through the [`ports::PasswordHasher`] port. Editing an account
//! is guarded by [`crate::security::UserAccessPolicy`]. The module follows
//! the same hexagonal layout as [`crate::task`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

//! User account aggregate root.

use super::{Actor, EmailAddress, PasswordHash, UserId, Username};
use crate::security::RoleSet;
use serde::{Deserialize, Serialize};

/// User account aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: Username,
    email: EmailAddress,
    password_hash: PasswordHash,
    roles: RoleSet,
}

/// Parameter object for reconstructing a persisted user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted username.
    pub username: Username,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted password hash.
    pub password_hash: PasswordHash,
    /// Persisted roles.
    pub roles: RoleSet,
}

impl User {
    /// Creates a new account with a fresh identifier.
    #[must_use]
    pub fn new(
        username: Username,
        email: EmailAddress,
        password_hash: PasswordHash,
        roles: RoleSet,
    ) -> Self {
        Self {
            id: UserId::new(),
            username,
            email,
            password_hash,
            roles,
        }
    }

    /// Reconstructs an account from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            roles: data.roles,
        }
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the email address, which doubles as the login identifier.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the stored password hash.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Returns the account roles.
    #[must_use]
    pub const fn roles(&self) -> &RoleSet {
        &self.roles
    }

    /// Projects the account onto the principal used by access policies.
    #[must_use]
    pub fn actor(&self) -> Actor {
        Actor::new(self.id, self.roles.clone())
    }

    /// Replaces the username.
    pub fn rename(&mut self, username: Username) {
        self.username = username;
    }

    /// Replaces the email address.
    pub fn change_email(&mut self, email: EmailAddress) {
        self.email = email;
    }

    /// Replaces the password hash.
    pub fn change_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }

    /// Replaces the role set.
    pub fn assign_roles(&mut self, roles: RoleSet) {
        self.roles = roles;
    }
}

//! Authenticated principal and its identifier.

use super::{Role, RoleSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for UserId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The authenticated principal a request acts on behalf of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    id: UserId,
    roles: RoleSet,
}

impl Actor {
    /// Creates an actor with the given roles.
    #[must_use]
    pub const fn new(id: UserId, roles: RoleSet) -> Self {
        Self { id, roles }
    }

    /// Creates an actor holding only the regular-user role.
    #[must_use]
    pub fn regular(id: UserId) -> Self {
        Self::new(id, RoleSet::single(Role::User))
    }

    /// Creates an actor holding only the administrator role.
    #[must_use]
    pub fn administrator(id: UserId) -> Self {
        Self::new(id, RoleSet::single(Role::Administrator))
    }

    /// Returns the actor identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the actor's roles.
    #[must_use]
    pub const fn roles(&self) -> &RoleSet {
        &self.roles
    }

    /// Returns `true` when the actor holds the administrator role.
    #[must_use]
    pub fn is_administrator(&self) -> bool {
        self.roles.contains(Role::Administrator)
    }
}

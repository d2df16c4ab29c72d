//! Role enumeration and the normalized role set carried by every actor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Capability label granted to an account.
///
/// Variants are ordered by privilege, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Role {
    /// Regular account holder.
    User,
    /// Account administrator.
    Administrator,
}

impl Role {
    /// Returns the canonical storage label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "ROLE_USER",
            Self::Administrator => "ROLE_ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Role> for &'static str {
    fn from(role: Role) -> Self {
        role.as_str()
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "ROLE_USER" => Ok(Self::User),
            "ROLE_ADMIN" => Ok(Self::Administrator),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = ParseRoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Error returned when a role label is not part of the fixed enumeration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// Stored role data as found in persisted accounts.
///
/// Older rows hold a single label while newer ones hold a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredRoles {
    Scalar(String),
    List(Vec<String>),
}

/// Immutable, non-empty set of roles.
///
/// An empty input normalizes to `{Role::User}`, so every set grants at
/// least the regular-user role. Serializes as a list of labels and accepts
/// either a list or a single label when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StoredRoles", into = "Vec<Role>")]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    /// Creates a role set, defaulting to the regular-user role when empty.
    #[must_use]
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut set: BTreeSet<Role> = roles.into_iter().collect();
        if set.is_empty() {
            set.insert(Role::User);
        }
        Self(set)
    }

    /// Creates a role set holding exactly one role.
    #[must_use]
    pub fn single(role: Role) -> Self {
        Self(BTreeSet::from([role]))
    }

    /// Parses storage labels into a role set.
    ///
    /// Blank labels are ignored; no labels at all yields the default set.
    ///
    /// # Errors
    ///
    /// Returns [`ParseRoleError`] for the first label outside the fixed
    /// enumeration.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, ParseRoleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roles = labels
            .into_iter()
            .filter(|label| !label.as_ref().trim().is_empty())
            .map(|label| Role::try_from(label.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(roles))
    }

    /// Returns `true` when the set grants `role`.
    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    /// Returns `true` when `role` is the only member of the set.
    #[must_use]
    pub fn is_exactly(&self, role: Role) -> bool {
        self.0.len() == 1 && self.contains(role)
    }

    /// Returns the most privileged role in the set.
    #[must_use]
    pub fn highest(&self) -> Role {
        self.0.last().copied().unwrap_or(Role::User)
    }

    /// Iterates roles from least to most privileged.
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }

    /// Returns the storage labels of the set.
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.iter().map(Role::as_str).collect()
    }
}

impl Default for RoleSet {
    fn default() -> Self {
        Self::single(Role::User)
    }
}

impl From<Role> for RoleSet {
    fn from(role: Role) -> Self {
        Self::single(role)
    }
}

impl From<RoleSet> for Vec<Role> {
    fn from(set: RoleSet) -> Self {
        set.0.into_iter().collect()
    }
}

impl TryFrom<StoredRoles> for RoleSet {
    type Error = ParseRoleError;

    fn try_from(stored: StoredRoles) -> Result<Self, Self::Error> {
        match stored {
            StoredRoles::Scalar(label) => Self::from_labels([label]),
            StoredRoles::List(labels) => Self::from_labels(labels),
        }
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels().join(","))
    }
}

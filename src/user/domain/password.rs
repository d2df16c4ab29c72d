//! Password hash storage and plain-password policy.

use super::UserDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Special characters accepted by [`PasswordPolicy::strict`].
const SPECIAL_CHARACTERS: &str = "@$!%*?&";

/// Opaque password hash produced by a
/// [`PasswordHasher`](crate::user::ports::PasswordHasher).
///
/// The `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wraps an encoded hash.
    #[must_use]
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Returns the encoded hash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Constraints applied to a plain password before it is hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum length in characters.
    pub min_length: usize,
    /// Maximum length in characters.
    pub max_length: usize,
    /// Whether lowercase, uppercase, digit and special characters are all
    /// required, with no characters outside that alphabet.
    pub require_character_classes: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 6,
            max_length: 4096,
            require_character_classes: false,
        }
    }
}

impl PasswordPolicy {
    /// Creates the strict account policy: 12 to 64 characters mixing
    /// lowercase, uppercase, digits and one of `@$!%*?&`.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            min_length: 12,
            max_length: 64,
            require_character_classes: true,
        }
    }

    /// Checks a plain password against the policy.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::PasswordTooShort`],
    /// [`UserDomainError::PasswordTooLong`] or
    /// [`UserDomainError::WeakPassword`] describing the first violated
    /// constraint.
    pub fn validate(&self, plain: &str) -> Result<(), UserDomainError> {
        let length = plain.chars().count();
        if length < self.min_length {
            return Err(UserDomainError::PasswordTooShort {
                min: self.min_length,
            });
        }
        if length > self.max_length {
            return Err(UserDomainError::PasswordTooLong {
                max: self.max_length,
            });
        }
        if self.require_character_classes && !has_required_classes(plain) {
            return Err(UserDomainError::WeakPassword);
        }
        Ok(())
    }
}

fn has_required_classes(plain: &str) -> bool {
    let is_special = |c: char| SPECIAL_CHARACTERS.contains(c);
    let only_accepted = plain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || is_special(c));

    only_accepted
        && plain.chars().any(|c| c.is_ascii_lowercase())
        && plain.chars().any(|c| c.is_ascii_uppercase())
        && plain.chars().any(|c| c.is_ascii_digit())
        && plain.chars().any(is_special)
}

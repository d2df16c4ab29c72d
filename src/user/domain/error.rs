//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The username exceeds the 25-character limit.
    #[error("username exceeds 25 character limit: {0}")]
    UsernameTooLong(String),

    /// The email address is empty after trimming.
    #[error("email address must not be empty")]
    EmptyEmail,

    /// The email address is not shaped `local@domain.tld`.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The email address exceeds the 60-character limit.
    #[error("email address exceeds 60 character limit: {0}")]
    EmailTooLong(String),

    /// The plain password is shorter than the policy minimum.
    #[error("password must contain at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// The plain password is longer than the policy maximum.
    #[error("password must contain at most {max} characters")]
    PasswordTooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// The plain password lacks a required character class or contains a
    /// character outside the accepted alphabet.
    #[error(
        "password must mix lowercase and uppercase letters, digits and one of @$!%*?&, and contain nothing else"
    )]
    WeakPassword,
}

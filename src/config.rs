//! Typed configuration for account and access rules.
//!
//! Every field has a default, so a partial JSON document only needs to name
//! the settings it overrides:
//!
//! ```
//! use taskboard::config::AppConfig;
//! use taskboard::security::UserEditRule;
//!
//! let config = AppConfig::from_json_str(r#"{"access": {"user_edit_rule": "exact_administrator"}}"#)
//!     .expect("valid configuration");
//! assert_eq!(config.access.user_edit_rule, UserEditRule::ExactAdministrator);
//! assert_eq!(config.password.min_length, 6);
//! ```

use crate::security::{UserAccessPolicy, UserEditRule};
use crate::user::domain::PasswordPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings for the access policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Rule used to decide who may edit user accounts.
    pub user_edit_rule: UserEditRule,
}

impl AccessConfig {
    /// Builds the user access policy for the configured rule.
    #[must_use]
    pub const fn user_access_policy(&self) -> UserAccessPolicy {
        UserAccessPolicy::new(self.user_edit_rule)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Access policy settings.
    pub access: AccessConfig,
    /// Plain-password constraints for registration and edits.
    pub password: PasswordPolicy,
}

impl AppConfig {
    /// Creates a configuration enforcing the strict password policy.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            password: PasswordPolicy::strict(),
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid JSON or
    /// names an unknown rule.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

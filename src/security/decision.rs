//! Outcome of a policy evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of evaluating an access policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// The operation may proceed.
    Permitted,
    /// The operation must not be performed.
    Denied,
}

impl Decision {
    /// Returns `true` for [`Decision::Permitted`].
    #[must_use]
    pub const fn is_permitted(self) -> bool {
        matches!(self, Self::Permitted)
    }

    /// Returns `true` for [`Decision::Denied`].
    #[must_use]
    pub const fn is_denied(self) -> bool {
        matches!(self, Self::Denied)
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Permitted => "permitted",
            Self::Denied => "denied",
        }
    }
}

impl From<bool> for Decision {
    fn from(permitted: bool) -> Self {
        if permitted {
            Self::Permitted
        } else {
            Self::Denied
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Edit policy for user accounts.

use super::{Actor, Decision, Role};
use serde::{Deserialize, Serialize};

/// How the administrator check for account editing is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserEditRule {
    /// Any role set containing the administrator role may edit users.
    #[default]
    ContainsAdministrator,
    /// Only a role set consisting of exactly the administrator role may
    /// edit users.
    ///
    /// This reproduces the legacy behaviour, which compared the joined role
    /// labels against `ROLE_ADMIN` and so rejected administrators holding
    /// additional roles. Use it only when that exact behaviour is required.
    ExactAdministrator,
}

/// Decides whether an actor may edit user accounts.
///
/// The check depends on the actor's roles only, never on the account being
/// edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserAccessPolicy {
    rule: UserEditRule,
}

impl UserAccessPolicy {
    /// Creates a policy evaluating the given rule.
    #[must_use]
    pub const fn new(rule: UserEditRule) -> Self {
        Self { rule }
    }

    /// Returns the rule this policy evaluates.
    #[must_use]
    pub const fn rule(&self) -> UserEditRule {
        self.rule
    }

    /// Evaluates the edit rule for `actor`.
    #[must_use]
    pub fn decide_edit_users(&self, actor: &Actor) -> Decision {
        let roles = actor.roles();
        let permitted = match self.rule {
            UserEditRule::ContainsAdministrator => roles.contains(Role::Administrator),
            UserEditRule::ExactAdministrator => roles.is_exactly(Role::Administrator),
        };
        Decision::from(permitted)
    }

    /// Returns `true` when `actor` may edit user accounts.
    #[must_use]
    pub fn can_edit_users(&self, actor: &Actor) -> bool {
        self.decide_edit_users(actor).is_permitted()
    }
}

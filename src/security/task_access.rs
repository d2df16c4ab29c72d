//! Deletion policy for tasks.

use super::{Actor, Decision, Role};
use crate::task::domain::Task;

/// Decides whether an actor may delete a task.
///
/// The rule is:
///
/// - the owner of a task may always delete it;
/// - an administrator may also delete anonymous tasks (tasks without an
///   owner);
/// - nobody may delete a task owned by someone else.
///
/// An administrator therefore cannot delete another user's task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskAccessPolicy;

impl TaskAccessPolicy {
    /// Evaluates the deletion rule for `actor` against `task`.
    #[must_use]
    pub fn decide_delete(actor: &Actor, task: &Task) -> Decision {
        let owned_by_actor = task.owner() == Some(actor.id());
        let permitted = match actor.roles().highest() {
            Role::Administrator => owned_by_actor || task.is_anonymous(),
            Role::User => owned_by_actor,
        };
        Decision::from(permitted)
    }

    /// Returns `true` when `actor` may delete `task`.
    #[must_use]
    pub fn can_delete(actor: &Actor, task: &Task) -> bool {
        Self::decide_delete(actor, task).is_permitted()
    }
}

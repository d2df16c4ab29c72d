//! Authorization decisions for the task board.
//!
//! This module holds the authenticated principal ([`Actor`]), the fixed role
//! enumeration, and the two access policies:
//!
//! - [`TaskAccessPolicy`] decides whether an actor may delete a task.
//! - [`UserAccessPolicy`] decides whether an actor may edit user accounts.
//!
//! Policies are pure functions of their inputs. They never mutate the actor
//! or the resource and report denial as [`Decision::Denied`]; turning a
//! denial into a user-facing rejection is the caller's job.

mod actor;
mod decision;
mod role;
mod task_access;
mod user_access;

pub use actor::{Actor, UserId};
pub use decision::Decision;
pub use role::{ParseRoleError, Role, RoleSet};
pub use task_access::TaskAccessPolicy;
pub use user_access::{UserAccessPolicy, UserEditRule};

#[cfg(test)]
mod tests;

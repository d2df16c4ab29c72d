//! Domain model for task lifecycle management.
//!
//! The task domain models task creation, editing, completion toggling and
//! ownership assignment while keeping all infrastructure concerns outside
//! of the domain boundary.

mod error;
mod ids;
mod task;
mod text;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskStatus};
pub use text::{TaskContent, TaskTitle};

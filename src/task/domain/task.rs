//! Task aggregate root and its completion status.

use super::{TaskContent, TaskId, TaskTitle};
use crate::security::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion status of a task.
///
/// A task moves freely between the two states; neither is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work on the task is outstanding.
    NotDone,
    /// The task has been marked as done.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotDone => "not_done",
            Self::Done => "done",
        }
    }

    /// Returns `true` for [`TaskStatus::Done`].
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl From<bool> for TaskStatus {
    fn from(done: bool) -> Self {
        if done { Self::Done } else { Self::NotDone }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    content: TaskContent,
    is_done: bool,
    owner: Option<UserId>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted content.
    pub content: TaskContent,
    /// Persisted completion flag.
    pub is_done: bool,
    /// Persisted owner reference, if any.
    pub owner: Option<UserId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, not-done task.
    ///
    /// `owner` is `None` for an anonymous task.
    #[must_use]
    pub fn new(
        title: TaskTitle,
        content: TaskContent,
        owner: Option<UserId>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskId::new(),
            title,
            content,
            is_done: false,
            owner,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            content: data.content,
            is_done: data.is_done,
            owner: data.owner,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task content.
    #[must_use]
    pub const fn content(&self) -> &TaskContent {
        &self.content
    }

    /// Returns `true` when the task is marked as done.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.is_done
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        if self.is_done {
            TaskStatus::Done
        } else {
            TaskStatus::NotDone
        }
    }

    /// Returns the owner reference, if any.
    #[must_use]
    pub const fn owner(&self) -> Option<UserId> {
        self.owner
    }

    /// Returns `true` when the task has no owner.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.owner.is_none()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sets the done flag to `done`.
    ///
    /// The assignment is unconditional: setting the current value again
    /// leaves the task unchanged. No other field is touched.
    pub const fn toggle(&mut self, done: bool) {
        self.is_done = done;
    }

    /// Replaces the owner reference. `None` makes the task anonymous.
    pub const fn assign_owner(&mut self, owner: Option<UserId>) {
        self.owner = owner;
    }

    /// Replaces the title and content.
    pub fn edit(&mut self, title: TaskTitle, content: TaskContent) {
        self.title = title;
        self.content = content;
    }
}

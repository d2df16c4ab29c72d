//! Service layer for task creation, editing, toggling and deletion.

use crate::security::{Actor, TaskAccessPolicy, UserId};
use crate::task::{
    domain::{Task, TaskContent, TaskDomainError, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    content: String,
}

impl CreateTaskRequest {
    /// Creates a request with the submitted title and content.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Request payload for editing the text of an existing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskRequest {
    task_id: TaskId,
    title: String,
    content: String,
}

impl EditTaskRequest {
    /// Creates a request replacing the title and content of `task_id`.
    #[must_use]
    pub fn new(task_id: TaskId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            task_id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The access policy denied the operation.
    #[error("user {actor} may not delete task {task_id}")]
    Forbidden {
        /// Actor whose request was denied.
        actor: UserId,
        /// Task the request targeted.
        task_id: TaskId,
    },
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a new task.
    ///
    /// The task is owned by `author`, or anonymous when `author` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title or content is
    /// blank, or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        request: CreateTaskRequest,
        author: Option<&Actor>,
    ) -> TaskLifecycleResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let content = TaskContent::new(request.content)?;
        let owner = author.map(Actor::id);

        let task = Task::new(title, content, owner, &*self.clock);
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), owner = ?owner, "task created");
        Ok(task)
    }

    /// Replaces the title and content of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] on blank input,
    /// [`TaskLifecycleError::NotFound`] when the task does not exist, or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn edit(&self, request: EditTaskRequest) -> TaskLifecycleResult<Task> {
        let EditTaskRequest {
            task_id,
            title,
            content,
        } = request;
        let validated_title = TaskTitle::new(title)?;
        let validated_content = TaskContent::new(content)?;

        let mut task = self.find_by_id_or_error(task_id).await?;
        task.edit(validated_title, validated_content);
        self.repository.update(&task).await?;
        info!(task_id = %task_id, "task edited");
        Ok(task)
    }

    /// Flips the done flag of a task and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn toggle(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self.find_by_id_or_error(task_id).await?;
        task.toggle(!task.is_done());
        self.repository.update(&task).await?;
        info!(task_id = %task_id, status = %task.status(), "task toggled");
        Ok(task)
    }

    /// Reassigns the owner of a task. `None` makes the task anonymous.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn assign_owner(
        &self,
        task_id: TaskId,
        owner: Option<UserId>,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.find_by_id_or_error(task_id).await?;
        task.assign_owner(owner);
        self.repository.update(&task).await?;
        info!(task_id = %task_id, owner = ?owner, "task owner assigned");
        Ok(task)
    }

    /// Deletes a task after checking [`TaskAccessPolicy`].
    ///
    /// On denial the task is left in place.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Forbidden`] when the policy denies the
    /// deletion, [`TaskLifecycleError::NotFound`] when the task does not
    /// exist, or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn delete(&self, actor: &Actor, task_id: TaskId) -> TaskLifecycleResult<()> {
        let task = self.find_by_id_or_error(task_id).await?;
        if TaskAccessPolicy::decide_delete(actor, &task).is_denied() {
            warn!(actor = %actor.id(), task_id = %task_id, "task deletion denied");
            return Err(TaskLifecycleError::Forbidden {
                actor: actor.id(),
                task_id,
            });
        }

        self.repository.remove(task_id).await?;
        info!(actor = %actor.id(), task_id = %task_id, "task deleted");
        Ok(())
    }

    /// Finds a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, task_id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(task_id).await?)
    }

    /// Returns every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Returns the tasks owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_owned_by(&self, owner: UserId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_by_owner(owner).await?)
    }

    async fn find_by_id_or_error(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }
}

//! Shared world state for task deletion BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::security::Actor;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskId,
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task deletion behaviour tests.
pub struct TaskDeletionWorld {
    pub service: TestTaskService,
    pub actors: HashMap<String, Actor>,
    pub tasks: HashMap<String, TaskId>,
    pub last_deletion: Option<Result<(), TaskLifecycleError>>,
}

impl TaskDeletionWorld {
    /// Creates a world with no actors or tasks.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            actors: HashMap::new(),
            tasks: HashMap::new(),
            last_deletion: None,
        }
    }

    /// Looks up a named actor.
    pub fn actor(&self, name: &str) -> Result<&Actor, eyre::Report> {
        self.actors
            .get(name)
            .ok_or_else(|| eyre::eyre!("unknown actor in scenario: {name}"))
    }

    /// Looks up a task by the title it was created with.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.tasks
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown task in scenario: {title}"))
    }
}

impl Default for TaskDeletionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskDeletionWorld {
    TaskDeletionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

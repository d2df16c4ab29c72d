//! Shared helpers for integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use taskboard::task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService};
use taskboard::user::{
    adapters::memory::InMemoryUserRepository,
    domain::PasswordHash,
    ports::{PasswordHasher, PasswordHasherError},
    services::UserAccountService,
};

/// Task service wired to in-memory storage.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Account service wired to in-memory storage and [`PrefixHasher`].
pub type TestAccountService = UserAccountService<InMemoryUserRepository, PrefixHasher>;

/// Reversible stand-in for a real password hasher.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixHasher;

impl PasswordHasher for PrefixHasher {
    fn hash(&self, plain: &str) -> Result<PasswordHash, PasswordHasherError> {
        Ok(PasswordHash::new(format!("prefix:{plain}")))
    }

    fn verify(&self, plain: &str, hash: &PasswordHash) -> bool {
        hash.as_str().strip_prefix("prefix:") == Some(plain)
    }
}

/// Builds a task service over an empty repository.
pub fn task_service() -> TestTaskService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Builds an account service over an empty repository.
pub fn account_service() -> TestAccountService {
    UserAccountService::new(Arc::new(InMemoryUserRepository::new()), Arc::new(PrefixHasher))
}

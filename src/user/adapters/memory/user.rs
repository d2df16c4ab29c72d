//! In-memory repository for user account tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::user::{
    domain::{EmailAddress, User, UserId, Username},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository with unique username and email
/// indexes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: HashMap<UserId, User>,
    username_index: HashMap<Username, UserId>,
    email_index: HashMap<EmailAddress, UserId>,
    registration_order: Vec<UserId>,
}

fn is_taken_by_other<K>(index: &HashMap<K, UserId>, key: &K, id: UserId) -> bool
where
    K: Eq + Hash,
{
    index.get(key).is_some_and(|&indexed_id| indexed_id != id)
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> UserRepositoryResult<RwLockReadGuard<'_, InMemoryUserState>> {
        self.state.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> UserRepositoryResult<RwLockWriteGuard<'_, InMemoryUserState>> {
        self.state.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn store(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.write()?;

        if state.users.contains_key(&user.id()) {
            return Err(UserRepositoryError::DuplicateUser(user.id()));
        }

        if state.username_index.contains_key(user.username()) {
            return Err(UserRepositoryError::DuplicateUsername(
                user.username().clone(),
            ));
        }

        if state.email_index.contains_key(user.email()) {
            return Err(UserRepositoryError::DuplicateEmail(user.email().clone()));
        }

        state
            .username_index
            .insert(user.username().clone(), user.id());
        state.email_index.insert(user.email().clone(), user.id());
        state.registration_order.push(user.id());
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.write()?;

        let stored = state
            .users
            .get(&user.id())
            .ok_or(UserRepositoryError::NotFound(user.id()))?;
        let old_username = stored.username().clone();
        let old_email = stored.email().clone();

        if is_taken_by_other(&state.username_index, user.username(), user.id()) {
            return Err(UserRepositoryError::DuplicateUsername(
                user.username().clone(),
            ));
        }
        if is_taken_by_other(&state.email_index, user.email(), user.id()) {
            return Err(UserRepositoryError::DuplicateEmail(user.email().clone()));
        }

        if *user.username() != old_username {
            state.username_index.remove(&old_username);
            state
                .username_index
                .insert(user.username().clone(), user.id());
        }
        if *user.email() != old_email {
            state.email_index.remove(&old_email);
            state.email_index.insert(user.email().clone(), user.id());
        }

        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.read()?;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        let state = self.read()?;
        let user = state
            .email_index
            .get(email)
            .and_then(|id| state.users.get(id))
            .cloned();
        Ok(user)
    }

    async fn list_all(&self) -> UserRepositoryResult<Vec<User>> {
        let state = self.read()?;
        Ok(state
            .registration_order
            .iter()
            .filter_map(|id| state.users.get(id))
            .cloned()
            .collect())
    }
}

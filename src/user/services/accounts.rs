//! Service layer for account registration, login and administration.

use crate::config::AppConfig;
use crate::security::{ParseRoleError, Role, RoleSet, UserAccessPolicy};
use crate::user::{
    domain::{Actor, EmailAddress, PasswordHash, User, UserDomainError, UserId, Username},
    ports::{PasswordHasher, PasswordHasherError, UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Request payload for registering a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    username: String,
    email: String,
    password: String,
    role: Option<String>,
}

impl RegisterUserRequest {
    /// Creates a request with the required account fields.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            role: None,
        }
    }

    /// Sets the role label chosen for the account.
    ///
    /// Without a role the account is a regular user.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Request payload for editing an account. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditUserRequest {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
    role: Option<String>,
}

impl EditUserRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new username.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the new email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the new plain password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the new role label, replacing all current roles.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Service-level errors for account operations.
#[derive(Debug, Error)]
pub enum UserAccountError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// The submitted role label is unknown.
    #[error(transparent)]
    Role(#[from] ParseRoleError),
    /// The password hasher failed.
    #[error(transparent)]
    Hasher(#[from] PasswordHasherError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
    /// The account does not exist.
    #[error("user not found: {0}")]
    NotFound(UserId),
    /// The email address or password did not match an account.
    #[error("invalid credentials")]
    AuthenticationFailed,
    /// The access policy denied the operation.
    #[error("user {actor} may not edit user accounts")]
    Forbidden {
        /// Actor whose request was denied.
        actor: UserId,
    },
}

/// Result type for account service operations.
pub type UserAccountResult<T> = Result<T, UserAccountError>;

/// Account orchestration service.
#[derive(Clone)]
pub struct UserAccountService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    repository: Arc<R>,
    hasher: Arc<H>,
    config: AppConfig,
}

impl<R, H> UserAccountService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    /// Creates a service using the default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self::with_config(repository, hasher, AppConfig::default())
    }

    /// Creates a service using a custom configuration.
    #[must_use]
    pub const fn with_config(repository: Arc<R>, hasher: Arc<H>, config: AppConfig) -> Self {
        Self {
            repository,
            hasher,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::Domain`] when a field or the password
    /// fails validation, [`UserAccountError::Role`] for an unknown role
    /// label, [`UserAccountError::Hasher`] when hashing fails, or
    /// [`UserAccountError::Repository`] when the email address is taken or
    /// persistence fails.
    pub async fn register(&self, request: RegisterUserRequest) -> UserAccountResult<User> {
        let RegisterUserRequest {
            username,
            email,
            password,
            role,
        } = request;

        let validated_username = Username::new(username)?;
        let validated_email = EmailAddress::new(email)?;
        let roles = parse_role(role.as_deref())?;
        let password_hash = self.hash_password(&password)?;

        let user = User::new(validated_username, validated_email, password_hash, roles);
        self.repository.store(&user).await?;
        info!(user_id = %user.id(), roles = %user.roles(), "user registered");
        Ok(user)
    }

    /// Checks login credentials and returns the authenticated actor.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::AuthenticationFailed`] when the email
    /// address is unknown or the password does not match, or
    /// [`UserAccountError::Repository`] when lookup fails.
    pub async fn authenticate(&self, email: &str, password: &str) -> UserAccountResult<Actor> {
        let Ok(address) = EmailAddress::new(email) else {
            warn!("authentication rejected a malformed email address");
            return Err(UserAccountError::AuthenticationFailed);
        };

        let Some(user) = self.repository.find_by_email(&address).await? else {
            warn!(email = %address, "authentication failed for unknown account");
            return Err(UserAccountError::AuthenticationFailed);
        };

        if !self.hasher.verify(password, user.password_hash()) {
            warn!(user_id = %user.id(), "authentication failed");
            return Err(UserAccountError::AuthenticationFailed);
        }

        info!(user_id = %user.id(), "user authenticated");
        Ok(user.actor())
    }

    /// Edits an account after checking [`UserAccessPolicy`].
    ///
    /// Nothing is persisted when the policy denies the request.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::Forbidden`] when the policy denies the
    /// edit, [`UserAccountError::NotFound`] when the account does not exist,
    /// or the validation, hashing and repository errors of
    /// [`Self::register`].
    pub async fn edit(
        &self,
        actor: &Actor,
        user_id: UserId,
        request: EditUserRequest,
    ) -> UserAccountResult<User> {
        if self.user_access_policy().decide_edit_users(actor).is_denied() {
            warn!(actor = %actor.id(), user_id = %user_id, "user edit denied");
            return Err(UserAccountError::Forbidden { actor: actor.id() });
        }

        let mut user = self.find_by_id_or_error(user_id).await?;
        self.apply_edit(&mut user, request)?;
        self.repository.update(&user).await?;
        info!(actor = %actor.id(), user_id = %user_id, "user edited");
        Ok(user)
    }

    /// Finds an account by identifier.
    ///
    /// Returns `Ok(None)` when the account does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, user_id: UserId) -> UserAccountResult<Option<User>> {
        Ok(self.repository.find_by_id(user_id).await?)
    }

    /// Returns every account.
    ///
    /// # Errors
    ///
    /// Returns [`UserAccountError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(&self) -> UserAccountResult<Vec<User>> {
        Ok(self.repository.list_all().await?)
    }

    fn user_access_policy(&self) -> UserAccessPolicy {
        self.config.access.user_access_policy()
    }

    fn hash_password(&self, plain: &str) -> UserAccountResult<PasswordHash> {
        self.config.password.validate(plain)?;
        Ok(self.hasher.hash(plain)?)
    }

    fn apply_edit(&self, user: &mut User, request: EditUserRequest) -> UserAccountResult<()> {
        let EditUserRequest {
            username,
            email,
            password,
            role,
        } = request;

        if let Some(value) = username {
            user.rename(Username::new(value)?);
        }
        if let Some(value) = email {
            user.change_email(EmailAddress::new(value)?);
        }
        if let Some(label) = role {
            user.assign_roles(parse_role(Some(label.as_str()))?);
        }
        if let Some(plain) = password {
            user.change_password(self.hash_password(&plain)?);
        }
        Ok(())
    }

    async fn find_by_id_or_error(&self, user_id: UserId) -> UserAccountResult<User> {
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or(UserAccountError::NotFound(user_id))
    }
}

fn parse_role(label: Option<&str>) -> Result<RoleSet, ParseRoleError> {
    label.map_or_else(
        || Ok(RoleSet::single(Role::User)),
        |value| RoleSet::from_labels([value]),
    )
}

/**
 * User Model and Repository
 *
 * This module defines the user record and the `UserRepository` port that the
 * rest of the backend depends on. The only implementation is the in-memory
 * store; records live for the lifetime of the process.
 *
 * # Uniqueness
 *
 * Usernames and emails are unique (exact, case-sensitive match). The
 * in-memory store checks both and inserts under one write guard, so two
 * concurrent registrations for the same username cannot both succeed.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::credentials::CredentialVerifier;
use crate::backend::auth::errors::AuthError;

/// User record
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user ID, assigned at creation
    pub id: Uuid,
    /// Unique username
    pub username: String,
    /// Unique email address
    pub email: String,
    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields needed to store a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Which unique field collided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictField {
    Username,
    Email,
}

impl ConflictField {
    /// User-facing conflict message
    pub fn message(&self) -> &'static str {
        match self {
            Self::Username => "Username already exists",
            Self::Email => "Email already exists",
        }
    }
}

impl fmt::Display for ConflictField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username => f.write_str("username"),
            Self::Email => f.write_str("email"),
        }
    }
}

/// Repository failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0} already exists")]
    Conflict(ConflictField),
    #[error("user store unavailable: {0}")]
    Unavailable(String),
}

/// Storage port for user records
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Atomically check uniqueness and insert.
    ///
    /// The username is checked before the email, so a request colliding on
    /// both reports `ConflictField::Username`.
    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// Number of stored users
    async fn count(&self) -> Result<usize, RepositoryError>;
}

#[derive(Debug, Default)]
struct UserTable {
    by_id: HashMap<Uuid, User>,
    by_username: HashMap<String, Uuid>,
    by_email: HashMap<String, Uuid>,
}

impl UserTable {
    fn lookup(&self, id: Option<&Uuid>) -> Option<User> {
        id.and_then(|id| self.by_id.get(id)).cloned()
    }
}

/// Process-local user store
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let mut table = self.table.write().await;

        if table.by_username.contains_key(&new_user.username) {
            return Err(RepositoryError::Conflict(ConflictField::Username));
        }
        if table.by_email.contains_key(&new_user.email) {
            return Err(RepositoryError::Conflict(ConflictField::Email));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };

        table.by_username.insert(user.username.clone(), user.id);
        table.by_email.insert(user.email.clone(), user.id);
        table.by_id.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.lookup(table.by_username.get(username)))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.lookup(table.by_email.get(email)))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.by_id.get(&id).cloned())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.table.read().await.by_id.len())
    }
}

/// Hash `password` and store a new user
///
/// # Errors
///
/// * `AuthError::Conflict` - username or email already taken
/// * `AuthError::Internal` - hashing or storage failure
pub async fn create_user(
    repo: &dyn UserRepository,
    verifier: &CredentialVerifier,
    username: &str,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    let password_hash = verifier.hash(password).await?;

    let user = repo
        .create(NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
        })
        .await?;

    Ok(user)
}

/**
 * Authentication Service
 *
 * `AuthService` ties the user repository, the credential verifier and the
 * session issuer together into the two use cases the HTTP layer calls:
 * registration and sign-in. Handlers stay thin and only translate
 * `AuthError` variants into responses.
 */

use std::sync::Arc;
use uuid::Uuid;

use crate::backend::auth::credentials::CredentialVerifier;
use crate::backend::auth::errors::{AuthError, MISSING_FIELDS};
use crate::backend::auth::sessions::{IssuedToken, SessionIssuer};
use crate::backend::auth::users::{create_user, ConflictField, User, UserRepository};
use crate::shared::config::AuthConfig;
use crate::shared::session::{AuthEvent, AuthState, SessionUser};

/// Result of a successful sign-in
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub user: User,
    pub token: IssuedToken,
}

/// Register and sign-in use cases
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    verifier: CredentialVerifier,
    sessions: SessionIssuer,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("verifier", &self.verifier)
            .field("sessions", &self.sessions)
            .finish_non_exhaustive()
    }
}

/// Trimmed identifier, or `None` if blank
fn identifier(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Password as typed, or `None` if blank
fn secret(value: &str) -> Option<&str> {
    (!value.trim().is_empty()).then_some(value)
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        verifier: CredentialVerifier,
        sessions: SessionIssuer,
    ) -> Self {
        Self {
            users,
            verifier,
            sessions,
        }
    }

    /// Build the service from the `[auth]` config section
    pub fn from_config(config: &AuthConfig, users: Arc<dyn UserRepository>) -> Self {
        Self::new(
            users,
            CredentialVerifier::new(config.bcrypt_cost),
            SessionIssuer::from_config(config),
        )
    }

    pub fn users(&self) -> &Arc<dyn UserRepository> {
        &self.users
    }

    pub fn sessions(&self) -> &SessionIssuer {
        &self.sessions
    }

    pub fn verifier(&self) -> &CredentialVerifier {
        &self.verifier
    }

    /// Register a new user.
    ///
    /// Username and email are stored trimmed. The password is hashed
    /// exactly as typed.
    ///
    /// # Errors
    ///
    /// * `AuthError::Validation` - a field is missing or blank
    /// * `AuthError::Conflict` - username (checked first) or email taken
    /// * `AuthError::Internal` - hashing or storage failure
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let (Some(username), Some(email), Some(password)) =
            (identifier(username), identifier(email), secret(password))
        else {
            return Err(AuthError::validation(MISSING_FIELDS));
        };

        if self.users.find_by_username(username).await?.is_some() {
            tracing::warn!("Registration rejected, username taken: {}", username);
            return Err(AuthError::Conflict(ConflictField::Username));
        }
        if self.users.find_by_email(email).await?.is_some() {
            tracing::warn!("Registration rejected, email taken for username: {}", username);
            return Err(AuthError::Conflict(ConflictField::Email));
        }

        let user = create_user(self.users.as_ref(), &self.verifier, username, email, password).await?;

        match self.users.count().await {
            Ok(total) => tracing::info!(user_id = %user.id, "User registered: {} ({} users total)", user.username, total),
            Err(e) => {
                tracing::info!(user_id = %user.id, "User registered: {}", user.username);
                tracing::warn!("Could not count users: {}", e);
            }
        }

        Ok(user)
    }

    /// Verify credentials and issue a session token.
    ///
    /// Unknown usernames and wrong passwords both return
    /// `AuthError::InvalidCredentials` after the same amount of bcrypt work.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<SignedIn, AuthError> {
        let (Some(username), Some(password)) = (identifier(username), secret(password)) else {
            return Err(AuthError::validation("Missing username or password"));
        };

        let state = AuthState::Anonymous.apply(AuthEvent::Attempt);
        tracing::debug!(?state, "Sign-in attempt for: {}", username);

        let accepted = match self.users.find_by_username(username).await? {
            Some(user) => {
                if self.verifier.verify(password, &user.password_hash).await {
                    Some(user)
                } else {
                    None
                }
            }
            None => {
                self.verifier.verify_unknown(password).await;
                None
            }
        };

        let Some(user) = accepted else {
            let state = state.apply(AuthEvent::Rejected);
            tracing::warn!(?state, "Invalid credentials for: {}", username);
            return Err(AuthError::InvalidCredentials);
        };

        let token = self.sessions.issue(&user)?;
        let state = state.apply(AuthEvent::Accepted(SessionUser {
            id: user.id,
            username: user.username.clone(),
        }));
        tracing::info!(user_id = %user.id, authenticated = state.is_authenticated(), "User signed in: {}", user.username);

        Ok(SignedIn { user, token })
    }

    /// Look up the full record behind a session
    pub async fn current_user(&self, id: Uuid) -> Result<Option<User>, AuthError> {
        Ok(self.users.find_by_id(id).await?)
    }
}

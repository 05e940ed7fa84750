//! Password hashing and verification
//!
//! bcrypt work is CPU bound, so both hashing and verification run on the
//! blocking thread pool instead of the async executor.
//!
//! bcrypt only reads the first 72 bytes of its input. Passwords past that
//! limit are refused instead of being silently truncated.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::OnceCell;

/// Input hashed once to produce the hash checked for unknown usernames
const EQUALIZER_INPUT: &str = "pcb-inspect/unknown-user";

/// Hashing failures
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Password is too long")]
    TooLong,
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// bcrypt hasher/verifier with a fixed work factor
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    cost: u32,
    equalizer_hash: Arc<OnceCell<String>>,
}

impl Default for CredentialVerifier {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl CredentialVerifier {
    pub fn new(cost: u32) -> Self {
        Self {
            cost,
            equalizer_hash: Arc::new(OnceCell::new()),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a fresh random salt
    pub async fn hash(&self, password: &str) -> Result<String, CredentialError> {
        let password = password.to_owned();
        let cost = self.cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::non_truncating_hash(password, cost))
            .await?
            .map_err(|e| match e {
                bcrypt::BcryptError::Truncation(_) => CredentialError::TooLong,
                other => CredentialError::Hash(other),
            })?;
        Ok(hash)
    }

    /// Check a password against a stored hash.
    ///
    /// A malformed hash or an over-long password counts as a mismatch.
    pub async fn verify(&self, password: &str, hash: &str) -> bool {
        let password = password.to_owned();
        let hash = hash.to_owned();
        match tokio::task::spawn_blocking(move || bcrypt::non_truncating_verify(password, &hash)).await {
            Ok(Ok(valid)) => valid,
            Ok(Err(bcrypt::BcryptError::Truncation(len))) => {
                tracing::debug!("Rejected password of {} bytes", len);
                false
            }
            Ok(Err(e)) => {
                tracing::warn!("Stored password hash could not be parsed: {:?}", e);
                false
            }
            Err(e) => {
                tracing::error!("Password verification task failed: {:?}", e);
                false
            }
        }
    }

    /// Spend the same bcrypt work as a real verification.
    ///
    /// Used when the username is unknown so that response time does not
    /// reveal whether an account exists.
    pub async fn verify_unknown(&self, password: &str) {
        match self
            .equalizer_hash
            .get_or_try_init(|| self.hash(EQUALIZER_INPUT))
            .await
        {
            Ok(hash) => {
                let _ = self.verify(password, hash).await;
            }
            Err(e) => tracing::error!("Failed to prepare equalizer hash: {:?}", e),
        }
    }
}

//! Authentication port.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::User;

/// Resolves credentials to a user.
///
/// Implementations may take their time: callers await the result
/// cooperatively and cannot cancel it.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Check an email/password pair.
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Create an account and return its identity.
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session storage failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Session serialization failed: {0}")]
    Serialization(String),
}

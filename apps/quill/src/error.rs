//! Application-level errors, as shown to the reader.

use quill_core::error::{DomainError, RepoError};
use quill_core::ports::{AuthError, StorageError};
use quill_shared::FormError;
use thiserror::Error;

/// Error surfaced by a command.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Please log in first")]
    Unauthorized,

    #[error("You can only change your own posts")]
    Forbidden,

    #[error("Invalid credentials. Please try again. Use demo@example.com / password for demo.")]
    InvalidCredentials,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("No {entity_type} with id {id}"))
            }
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Unauthorized => AppError::Unauthorized,
            DomainError::Forbidden => AppError::Forbidden,
            DomainError::Repo(e) => e.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Not found".to_string()),
            RepoError::Constraint(msg) => AppError::Validation(msg),
            RepoError::Backend(msg) => {
                tracing::error!("Repository failure: {}", msg);
                AppError::Internal(msg)
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::InvalidCredentials,
            AuthError::Storage(e) => e.into(),
            AuthError::Serialization(msg) => {
                tracing::error!("Session serialization failed: {}", msg);
                AppError::Internal(msg)
            }
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        tracing::error!("Session storage failed: {}", err);
        AppError::Internal(err.to_string())
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

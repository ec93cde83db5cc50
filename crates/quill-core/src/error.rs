//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Login required")]
    Unauthorized,

    #[error("Only the author may change this post")]
    Forbidden,

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl DomainError {
    pub fn post_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "post",
            id: id.into(),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Backend failure: {0}")]
    Backend(String),
}

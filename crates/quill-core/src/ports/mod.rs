//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod repository;
mod storage;

pub use auth::{AuthError, Authenticator};
pub use repository::{CommentRepository, PostRepository};
pub use storage::{KeyValueStore, StorageError};

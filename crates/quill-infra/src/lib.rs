//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! in-memory repositories preloaded with the demo blog, key/value stores
//! for the session blob, and the demo authenticator.
//!
//! ## Feature Flags
//!
//! - `file-store` (default) - JSON-file backed [`storage::FileStore`]

pub mod auth;
pub mod repository;
pub mod seed;
pub mod storage;

pub use auth::{DemoAuthenticator, DemoCredentials};
pub use repository::{InMemoryCommentRepository, InMemoryPostRepository};
pub use storage::InMemoryStore;

#[cfg(feature = "file-store")]
pub use storage::FileStore;

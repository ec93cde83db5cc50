//! # Quill Core
//!
//! The domain layer of the Quill blog.
//! This crate contains the post model, the filter engine, the ownership rule
//! and the session state machine. Storage and credential checks are reached
//! only through the traits in [`ports`].

pub mod archive;
pub mod domain;
pub mod editor;
pub mod error;
pub mod filter;
pub mod listing;
pub mod ownership;
pub mod ports;
pub mod reader;
pub mod session;

pub use editor::PostEditor;
pub use error::{DomainError, RepoError};
pub use filter::PostQuery;
pub use reader::BlogReader;
pub use session::{SessionManager, SessionState};

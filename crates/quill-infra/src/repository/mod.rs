//! Repository implementations.

mod memory;

pub use memory::{InMemoryCommentRepository, InMemoryPostRepository};

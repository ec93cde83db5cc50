//! Key/value stores backing the session blob.

mod memory;

#[cfg(feature = "file-store")]
mod file;

pub use memory::InMemoryStore;

#[cfg(feature = "file-store")]
pub use file::FileStore;

//! Domain entities - the blog's records.

mod comment;
mod post;
mod user;

pub use comment::Comment;
pub use post::{EXCERPT_TITLE_CHARS, Post, PostDraft, parse_tags};
pub use user::User;
pub(crate) use user::mask_email;

/// Mint an identifier for a record created at runtime.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

//! # Quill Shared
//!
//! Types exchanged with the rendering layer: the forms a reader fills in and
//! the flattened views handed back for display. Nothing here depends on the
//! domain crate, so any front end can reuse it.

pub mod dto;
pub mod view;

pub use dto::{EDITOR_CATEGORIES, FormError, LoginForm, PostForm, RegisterForm};
pub use view::{CommentView, PostCard, SessionView};

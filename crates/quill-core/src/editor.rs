//! Post editor - create, replace and delete posts as the session user.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::domain::{Post, PostDraft, User, new_id};
use crate::error::{DomainError, RepoError};
use crate::ownership::ensure_owner;
use crate::ports::{CommentRepository, PostRepository};

/// Editing operations, gated by authentication and ownership.
pub struct PostEditor {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl PostEditor {
    pub fn new(posts: Arc<dyn PostRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self {
            posts,
            comments,
            today: local_today,
        }
    }

    /// Replace the date source used for published/updated dates.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Fetch a post for the edit form.
    ///
    /// `NotFound` and `Forbidden` both mean "go back to the dashboard".
    pub async fn load_for_edit(&self, id: &str, user: Option<&User>) -> Result<Post, DomainError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;
        ensure_owner(&post, user)?;
        Ok(post)
    }

    pub async fn create(&self, draft: PostDraft, user: Option<&User>) -> Result<Post, DomainError> {
        let author = user.ok_or(DomainError::Unauthorized)?;
        draft.validate()?;

        let post = Post::from_draft(new_id(), draft.normalized(), author.clone(), (self.today)());
        let saved = self.posts.save(post).await?;

        tracing::info!(post_id = %saved.id, author_id = %author.id, "Post created");
        Ok(saved)
    }

    /// Replace the editable fields of an existing post.
    pub async fn update(
        &self,
        id: &str,
        draft: PostDraft,
        user: Option<&User>,
    ) -> Result<Post, DomainError> {
        let existing = self.load_for_edit(id, user).await?;
        draft.validate()?;

        let post = existing.replaced_by(draft.normalized(), (self.today)());
        let saved = self.posts.save(post).await?;

        tracing::info!(post_id = %saved.id, "Post updated");
        Ok(saved)
    }

    /// Delete a post together with its comments.
    pub async fn delete(&self, id: &str, user: Option<&User>) -> Result<(), DomainError> {
        let post = self.load_for_edit(id, user).await?;

        self.posts.delete(&post.id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::post_not_found(id),
            other => DomainError::Repo(other),
        })?;
        let dropped = self.comments.delete_by_post(&post.id).await?;

        tracing::info!(post_id = %post.id, comments = dropped, "Post deleted");
        Ok(())
    }
}

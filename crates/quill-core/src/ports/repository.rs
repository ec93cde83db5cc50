use async_trait::async_trait;

use crate::domain::{Comment, Post};
use crate::error::RepoError;
use crate::filter::{PostQuery, filter_posts};

/// Post repository - the ordered post sequence.
///
/// `list` returns posts in store order; every other listing keeps that order.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError>;

    /// All posts in store order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Posts matching a query, in store order.
    async fn filter(&self, query: &PostQuery) -> Result<Vec<Post>, RepoError> {
        Ok(filter_posts(&self.list().await?, query))
    }

    /// Posts written by the given author.
    async fn find_by_author(&self, author_id: &str) -> Result<Vec<Post>, RepoError> {
        let posts = self.list().await?;
        Ok(posts
            .into_iter()
            .filter(|post| post.author.id == author_id)
            .collect())
    }

    /// Insert a new post at the end, or replace the post with the same id in place.
    async fn save(&self, post: Post) -> Result<Post, RepoError>;

    /// Remove a post. Returns `RepoError::NotFound` if it does not exist.
    async fn delete(&self, id: &str) -> Result<(), RepoError>;
}

/// Comment repository - comments keyed by their owning post.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments of a post in insertion order.
    async fn find_by_post(&self, post_id: &str) -> Result<Vec<Comment>, RepoError>;

    /// Append a comment.
    async fn save(&self, comment: Comment) -> Result<Comment, RepoError>;

    /// Drop every comment of a post.
    async fn delete_by_post(&self, post_id: &str) -> Result<usize, RepoError>;
}

//! In-memory repositories over ordered vectors.
//!
//! Contents live for the lifetime of the process only.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Comment, Post};
use quill_core::error::RepoError;
use quill_core::ports::{CommentRepository, PostRepository};

use crate::seed;

/// Post store keeping insertion order.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// Repository preloaded with the demo posts.
    pub fn seeded() -> Self {
        Self::new(seed::posts())
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, "Finding post by id");
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_author(&self, author_id: &str) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .filter(|p| p.author.id == author_id)
            .cloned()
            .collect())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        match posts.iter_mut().find(|p| p.id == post.id) {
            Some(slot) => *slot = post.clone(),
            None => posts.push(post.clone()),
        }
        Ok(post)
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

/// Comment store keeping insertion order.
pub struct InMemoryCommentRepository {
    comments: RwLock<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self {
            comments: RwLock::new(comments),
        }
    }

    /// Repository preloaded with the demo comments.
    pub fn seeded() -> Self {
        Self::new(seed::comments())
    }
}

impl Default for InMemoryCommentRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_post(&self, post_id: &str) -> Result<Vec<Comment>, RepoError> {
        let comments = self.comments.read().await;
        Ok(comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn save(&self, comment: Comment) -> Result<Comment, RepoError> {
        let mut comments = self.comments.write().await;
        if comments.iter().any(|c| c.id == comment.id) {
            return Err(RepoError::Constraint(format!(
                "comment {} already exists",
                comment.id
            )));
        }
        comments.push(comment.clone());
        Ok(comment)
    }

    async fn delete_by_post(&self, post_id: &str) -> Result<usize, RepoError> {
        let mut comments = self.comments.write().await;
        let before = comments.len();
        comments.retain(|c| c.post_id != post_id);
        Ok(before - comments.len())
    }
}

//! Read-side queries: post detail, dashboard, archive, comments.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::archive::{YearGroup, group_by_year};
use crate::domain::{Comment, Post, User, new_id};
use crate::error::DomainError;
use crate::filter::{PostQuery, category_for_slug, posts_with_tag};
use crate::listing::{BlogListing, CategoryChangePolicy};
use crate::ownership::is_owner;
use crate::ports::{CommentRepository, PostRepository};

/// A post with its comments, as shown on the post page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    pub post: Post,
    pub comments: Vec<Comment>,
    /// Whether the viewer may edit this post.
    pub is_owner: bool,
}

/// The session user's own posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dashboard {
    pub posts: Vec<Post>,
}

impl Dashboard {
    pub fn total(&self) -> usize {
        self.posts.len()
    }

    pub fn published(&self) -> usize {
        self.posts.iter().filter(|p| p.is_published).count()
    }

    pub fn drafts(&self) -> usize {
        self.total() - self.published()
    }
}

pub struct BlogReader {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    today: fn() -> NaiveDate,
}

impl BlogReader {
    pub fn new(posts: Arc<dyn PostRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self {
            posts,
            comments,
            today: || Local::now().date_naive(),
        }
    }

    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub async fn search(&self, query: &PostQuery) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.filter(query).await?)
    }

    /// Listing state over the posts as they are now.
    pub async fn listing(&self, policy: CategoryChangePolicy) -> Result<BlogListing, DomainError> {
        Ok(BlogListing::new(self.posts.list().await?, policy))
    }

    pub async fn tagged(&self, tag: &str) -> Result<Vec<Post>, DomainError> {
        Ok(posts_with_tag(&self.posts.list().await?, tag))
    }

    /// Posts of the category whose slug is `slug`; `None` if no category has it.
    pub async fn category_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<(String, Vec<Post>)>, DomainError> {
        let posts = self.posts.list().await?;
        let Some(category) = category_for_slug(&posts, slug) else {
            return Ok(None);
        };
        let matching = posts
            .into_iter()
            .filter(|p| p.category == category)
            .collect();
        Ok(Some((category, matching)))
    }

    pub async fn post_detail(
        &self,
        id: &str,
        viewer: Option<&User>,
    ) -> Result<PostDetail, DomainError> {
        tracing::debug!(post_id = %id, "Loading post detail");

        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;
        let comments = self.comments.find_by_post(&post.id).await?;
        let is_owner = is_owner(&post, viewer);

        Ok(PostDetail {
            post,
            comments,
            is_owner,
        })
    }

    /// Posts written by the session user; empty when nobody is logged in.
    pub async fn dashboard(&self, user: Option<&User>) -> Result<Dashboard, DomainError> {
        let posts = match user {
            Some(user) => self.posts.find_by_author(&user.id).await?,
            None => Vec::new(),
        };
        Ok(Dashboard { posts })
    }

    pub async fn archive(&self) -> Result<Vec<YearGroup>, DomainError> {
        Ok(group_by_year(&self.posts.list().await?))
    }

    /// Append a comment by the session user.
    pub async fn add_comment(
        &self,
        post_id: &str,
        content: &str,
        user: Option<&User>,
    ) -> Result<Comment, DomainError> {
        let author = user.ok_or(DomainError::Unauthorized)?;
        let content = content.trim();
        if content.is_empty() {
            return Err(DomainError::Validation("Comment cannot be empty".to_string()));
        }
        if self.posts.find_by_id(post_id).await?.is_none() {
            return Err(DomainError::post_not_found(post_id));
        }

        let comment = Comment::new(new_id(), post_id, author.clone(), content, (self.today)());
        let saved = self.comments.save(comment).await?;

        tracing::info!(post_id = %post_id, comment_id = %saved.id, "Comment added");
        Ok(saved)
    }
}

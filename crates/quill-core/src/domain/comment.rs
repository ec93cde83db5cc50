use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::User;

/// Comment entity - belongs to exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: User,
    pub created_at: NaiveDate,
    pub post_id: String,
}

impl Comment {
    pub fn new(
        id: String,
        post_id: impl Into<String>,
        author: User,
        content: impl Into<String>,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            author,
            created_at,
            post_id: post_id.into(),
        }
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::User;
use crate::error::DomainError;

/// Number of title characters used when a draft has no excerpt.
pub const EXCERPT_TITLE_CHARS: usize = 120;

/// Post entity - a blog article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub category: String,
    pub author: User,
    pub published_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub is_published: bool,
}

impl Post {
    /// Build a new post from a validated draft.
    pub fn from_draft(id: String, draft: PostDraft, author: User, today: NaiveDate) -> Self {
        let excerpt = draft.excerpt_or_default();
        Self {
            id,
            title: draft.title,
            content: draft.content,
            excerpt,
            cover_image: draft.cover_image,
            tags: draft.tags,
            category: draft.category,
            author,
            published_at: today,
            updated_at: today,
            is_published: draft.is_published,
        }
    }

    /// Full replacement of the editable fields. Identity, author and the
    /// original publication date carry over.
    pub fn replaced_by(&self, draft: PostDraft, today: NaiveDate) -> Self {
        Self::from_draft(self.id.clone(), draft, self.author.clone(), today)
            .with_published_at(self.published_at)
    }

    fn with_published_at(mut self, published_at: NaiveDate) -> Self {
        self.published_at = published_at;
        self
    }

    /// Prefill a draft with this post's fields, as the edit form does.
    pub fn to_draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            excerpt: Some(self.excerpt.clone()),
            cover_image: self.cover_image.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            is_published: self.is_published,
        }
    }
}

/// Editor input for creating or replacing a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub is_published: bool,
}

impl PostDraft {
    /// Check the required fields: title, content and category.
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing = [&self.title, &self.content, &self.category]
            .iter()
            .any(|field| field.trim().is_empty());

        if missing {
            return Err(DomainError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }
        Ok(())
    }

    /// The excerpt to store: the given one, or the start of the title.
    pub fn excerpt_or_default(&self) -> String {
        match self.excerpt.as_deref().map(str::trim) {
            Some(excerpt) if !excerpt.is_empty() => excerpt.to_string(),
            _ => {
                let head: String = self.title.chars().take(EXCERPT_TITLE_CHARS).collect();
                format!("{head}...")
            }
        }
    }

    /// Normalize optional fields: blank excerpt and cover image become `None`.
    pub fn normalized(mut self) -> Self {
        self.excerpt = self.excerpt.filter(|e| !e.trim().is_empty());
        self.cover_image = self
            .cover_image
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self
    }
}

/// Split a comma separated tag field into trimmed tags.
///
/// Empty entries are dropped; duplicates and order are kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

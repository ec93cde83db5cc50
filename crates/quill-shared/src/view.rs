//! Flattened views handed to the rendering layer.

use serde::{Deserialize, Serialize};

/// One entry of a post listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author_name: String,
    /// `yyyy-MM-dd`
    pub published_at: String,
    pub is_published: bool,
}

impl PostCard {
    /// Status label used by the dashboard.
    pub fn status(&self) -> &'static str {
        if self.is_published { "Published" } else { "Draft" }
    }
}

/// One comment under a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub author_name: String,
    pub created_at: String,
    pub content: String,
}

/// Session as shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionView {
    Anonymous,
    Pending,
    Authenticated { id: String, name: String, email: String },
}

impl SessionView {
    pub fn label(&self) -> String {
        match self {
            SessionView::Anonymous => "not logged in".to_string(),
            SessionView::Pending => "logging in...".to_string(),
            SessionView::Authenticated { name, email, .. } => format!("{name} <{email}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_view_json() {
        let view = SessionView::Authenticated {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["state"], "authenticated");
        assert_eq!(view.label(), "John Doe <john@example.com>");

        let anon = serde_json::to_value(SessionView::Anonymous).unwrap();
        assert_eq!(anon, serde_json::json!({"state": "anonymous"}));
    }
}

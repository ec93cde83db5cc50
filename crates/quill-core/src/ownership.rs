//! Ownership rule gating edit and delete.

use crate::domain::{Post, User};
use crate::error::DomainError;

/// A user owns a post when they are its author.
pub fn is_owner(post: &Post, user: Option<&User>) -> bool {
    user.is_some_and(|user| post.author.id == user.id)
}

/// Like [`is_owner`], but says why access is refused.
pub fn ensure_owner(post: &Post, user: Option<&User>) -> Result<(), DomainError> {
    match user {
        None => Err(DomainError::Unauthorized),
        Some(_) if is_owner(post, user) => Ok(()),
        Some(_) => Err(DomainError::Forbidden),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn post_by(author: &User) -> Post {
        let date = NaiveDate::from_ymd_opt(2023, 5, 10).unwrap();
        Post {
            id: "3".to_string(),
            title: "Title".to_string(),
            content: String::new(),
            excerpt: String::new(),
            cover_image: None,
            tags: Vec::new(),
            category: "Web Development".to_string(),
            author: author.clone(),
            published_at: date,
            updated_at: date,
            is_published: true,
        }
    }

    #[test]
    fn test_owner_is_author_by_id() {
        let john = User::new("1", "John Doe", "john@example.com");
        let post = post_by(&john);

        assert!(is_owner(&post, Some(&john)));

        // Same id, different profile: still the owner.
        let renamed = User::new("1", "Johnny", "johnny@example.com");
        assert!(is_owner(&post, Some(&renamed)));
    }

    #[test]
    fn test_not_owner() {
        let john = User::new("1", "John Doe", "john@example.com");
        let jane = User::new("2", "Jane Smith", "jane@example.com");
        let post = post_by(&john);

        assert!(!is_owner(&post, Some(&jane)));
        assert!(!is_owner(&post, None));
    }

    #[test]
    fn test_ensure_owner_errors() {
        let john = User::new("1", "John Doe", "john@example.com");
        let jane = User::new("2", "Jane Smith", "jane@example.com");
        let post = post_by(&john);

        assert!(ensure_owner(&post, Some(&john)).is_ok());
        assert!(matches!(ensure_owner(&post, None), Err(DomainError::Unauthorized)));
        assert!(matches!(ensure_owner(&post, Some(&jane)), Err(DomainError::Forbidden)));
    }
}

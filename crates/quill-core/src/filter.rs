//! Filter engine - derives the visible posts from a search text and a category.
//!
//! Matching rules:
//! - the search text is matched case-insensitively as a substring of the
//!   title, the excerpt, or any tag; an empty search matches everything
//! - the category is compared exactly, case included
//! - results keep the input order, nothing is ranked

use crate::domain::Post;

/// A search text plus an optional category label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub search: String,
    pub category: Option<String>,
}

impl PostQuery {
    pub fn new(search: impl Into<String>, category: Option<String>) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// Query that only constrains the search text.
    pub fn search(search: impl Into<String>) -> Self {
        Self::new(search, None)
    }

    /// Query that only constrains the category.
    pub fn category(category: impl Into<String>) -> Self {
        Self::new(String::new(), Some(category.into()))
    }

    /// `true` when neither field constrains the result.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.category.is_none()
    }

    pub fn matches(&self, post: &Post) -> bool {
        let needle = self.search.to_lowercase();
        matches_search(post, &needle) && self.matches_category(post)
    }

    fn matches_category(&self, post: &Post) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| post.category == category)
    }
}

fn matches_search(post: &Post, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    post.title.to_lowercase().contains(needle)
        || post.excerpt.to_lowercase().contains(needle)
        || post.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Posts matching `query`, in their original order.
pub fn filter_posts(posts: &[Post], query: &PostQuery) -> Vec<Post> {
    let needle = query.search.to_lowercase();
    posts
        .iter()
        .filter(|post| matches_search(post, &needle) && query.matches_category(post))
        .cloned()
        .collect()
}

/// Distinct categories in order of first appearance.
pub fn categories(posts: &[Post]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for post in posts {
        if !seen.contains(&post.category) {
            seen.push(post.category.clone());
        }
    }
    seen
}

/// Posts carrying `tag`, compared case-insensitively as a whole tag.
pub fn posts_with_tag(posts: &[Post], tag: &str) -> Vec<Post> {
    let tag = tag.to_lowercase();
    posts
        .iter()
        .filter(|post| post.tags.iter().any(|t| t.to_lowercase() == tag))
        .cloned()
        .collect()
}

/// URL slug of a category label: `Web Development` -> `web-development`.
pub fn category_slug(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// The category label whose slug equals `slug`, if any post uses one.
pub fn category_for_slug(posts: &[Post], slug: &str) -> Option<String> {
    let slug = slug.to_lowercase();
    categories(posts)
        .into_iter()
        .find(|label| category_slug(label) == slug)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::User;

    fn post(id: &str, title: &str, tags: &[&str], category: &str) -> Post {
        let date = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
        Post {
            id: id.to_string(),
            title: title.to_string(),
            content: String::new(),
            excerpt: format!("About {title}"),
            cover_image: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            category: category.to_string(),
            author: User::new("1", "John Doe", "john@example.com"),
            published_at: date,
            updated_at: date,
            is_published: true,
        }
    }

    fn store() -> Vec<Post> {
        vec![
            post("1", "Getting Started", &["React", "TypeScript"], "Programming"),
            post("2", "Modern Layouts", &["CSS", "Frontend"], "Web Development"),
            post("3", "Personal Blog", &["React", "Markdown"], "Web Development"),
        ]
    }

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let posts = store();
        assert_eq!(filter_posts(&posts, &PostQuery::default()), posts);
    }

    #[test]
    fn test_search_matches_tags_case_insensitively() {
        let posts = store();
        let result = filter_posts(&posts, &PostQuery::search("react"));
        assert_eq!(ids(&result), vec!["1", "3"]);
    }

    #[test]
    fn test_search_matches_title_and_excerpt() {
        let posts = store();
        assert_eq!(ids(&filter_posts(&posts, &PostQuery::search("LAYOUTS"))), vec!["2"]);
        assert_eq!(ids(&filter_posts(&posts, &PostQuery::search("about personal"))), vec!["3"]);
        assert!(filter_posts(&posts, &PostQuery::search("haskell")).is_empty());
    }

    #[test]
    fn test_category_is_exact_and_case_sensitive() {
        let posts = store();
        let result = filter_posts(&posts, &PostQuery::category("Web Development"));
        assert_eq!(ids(&result), vec!["2", "3"]);

        assert!(filter_posts(&posts, &PostQuery::category("web development")).is_empty());
        assert!(filter_posts(&posts, &PostQuery::category("Web")).is_empty());
    }

    #[test]
    fn test_search_and_category_combine() {
        let posts = store();
        let query = PostQuery::new("react", Some("Web Development".to_string()));
        assert_eq!(ids(&filter_posts(&posts, &query)), vec!["3"]);
    }

    #[test]
    fn test_filter_is_subset_and_idempotent() {
        let posts = store();
        let queries = [
            PostQuery::default(),
            PostQuery::search("r"),
            PostQuery::search("css"),
            PostQuery::category("Programming"),
            PostQuery::new("e", Some("Web Development".to_string())),
            PostQuery::search("nothing matches this"),
        ];

        for query in &queries {
            let once = filter_posts(&posts, query);
            assert!(once.iter().all(|p| posts.contains(p)), "{query:?}");
            assert_eq!(filter_posts(&once, query), once, "{query:?}");
        }
    }

    #[test]
    fn test_matches_agrees_with_filter() {
        let posts = store();
        let query = PostQuery::new("react", Some("Programming".to_string()));
        let expected: Vec<Post> = posts.iter().filter(|p| query.matches(p)).cloned().collect();
        assert_eq!(filter_posts(&posts, &query), expected);
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        assert_eq!(categories(&store()), vec!["Programming", "Web Development"]);
        assert!(categories(&[]).is_empty());
    }

    #[test]
    fn test_posts_with_tag_is_whole_tag() {
        let posts = store();
        assert_eq!(ids(&posts_with_tag(&posts, "react")), vec!["1", "3"]);
        assert!(posts_with_tag(&posts, "reac").is_empty());
    }

    #[test]
    fn test_category_slugs() {
        assert_eq!(category_slug("Web Development"), "web-development");
        assert_eq!(category_slug("Programming"), "programming");

        let posts = store();
        assert_eq!(
            category_for_slug(&posts, "web-development").as_deref(),
            Some("Web Development")
        );
        assert_eq!(category_for_slug(&posts, "design"), None);
    }
}

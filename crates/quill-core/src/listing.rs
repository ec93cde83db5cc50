//! Blog listing state - search box, category selector and the visible posts.

use crate::domain::Post;
use crate::filter::{PostQuery, categories, filter_posts};

/// What happens to the search text when the category changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryChangePolicy {
    /// Selecting a category empties the search box.
    #[default]
    ClearSearch,
    /// The search text survives a category change.
    KeepSearch,
}

/// Result shown to the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visible {
    /// No filter has run yet; every post is shown.
    Unfiltered,
    /// Output of the last filter run. May be empty.
    Filtered(Vec<Post>),
}

/// Listing state over a fixed snapshot of posts.
///
/// Typing only records the search text; the visible posts change on
/// [`submit_search`](Self::submit_search) or on a category change.
#[derive(Debug, Clone)]
pub struct BlogListing {
    posts: Vec<Post>,
    query: PostQuery,
    visible: Visible,
    policy: CategoryChangePolicy,
}

impl BlogListing {
    pub fn new(posts: Vec<Post>, policy: CategoryChangePolicy) -> Self {
        Self {
            posts,
            query: PostQuery::default(),
            visible: Visible::Unfiltered,
            policy,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.query.search
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.query.category.as_deref()
    }

    /// Categories offered by the selector.
    pub fn categories(&self) -> Vec<String> {
        categories(&self.posts)
    }

    pub fn state(&self) -> &Visible {
        &self.visible
    }

    /// Posts to render.
    pub fn visible(&self) -> &[Post] {
        match &self.visible {
            Visible::Unfiltered => &self.posts,
            Visible::Filtered(posts) => posts,
        }
    }

    /// Record the search text without refiltering.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
    }

    /// Run the filter with the current search text and category.
    pub fn submit_search(&mut self) -> &[Post] {
        self.refilter();
        self.visible()
    }

    /// Select a category (`None` = all categories) and refilter.
    pub fn select_category(&mut self, category: Option<String>) -> &[Post] {
        self.query.category = category;
        if self.policy == CategoryChangePolicy::ClearSearch {
            self.query.search.clear();
        }
        self.refilter();
        self.visible()
    }

    /// Swap in a fresh snapshot of posts. The search text and category are
    /// kept, and a filtered listing is filtered again over the new posts.
    pub fn reload(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        if matches!(self.visible, Visible::Filtered(_)) {
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        let result = filter_posts(&self.posts, &self.query);
        tracing::debug!(
            search = %self.query.search,
            category = ?self.query.category,
            matched = result.len(),
            "Listing refiltered"
        );
        self.visible = Visible::Filtered(result);
    }
}

//! Read-only post handlers.

use quill_core::PostQuery;
use quill_core::archive::YearGroup;
use quill_core::domain::Post;
use quill_core::filter::posts_with_tag;
use quill_core::reader::{Dashboard, PostDetail};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Filters accepted by `list`.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub search: Option<String>,
    /// Category label or slug.
    pub category: Option<String>,
    pub tag: Option<String>,
}

pub async fn list(state: &AppState, filter: ListFilter) -> AppResult<Vec<Post>> {
    let category = match filter.category {
        Some(c) => Some(resolve_category(state, &c).await?),
        None => None,
    };
    let query = PostQuery::new(filter.search.unwrap_or_default(), category);
    let posts = state.reader.search(&query).await?;

    Ok(match filter.tag {
        Some(tag) => posts_with_tag(&posts, &tag),
        None => posts,
    })
}

/// A slug such as `web-development` resolves to its label; anything else
/// is taken as the label itself.
async fn resolve_category(state: &AppState, category: &str) -> AppResult<String> {
    Ok(match state.reader.category_by_slug(category).await? {
        Some((label, _)) => label,
        None => category.to_string(),
    })
}

pub async fn categories(state: &AppState) -> AppResult<Vec<String>> {
    let listing = state.reader.listing(state.category_policy).await?;
    Ok(listing.categories())
}

pub async fn show(state: &AppState, id: &str) -> AppResult<PostDetail> {
    let viewer = state.session.current_user();
    Ok(state.reader.post_detail(id, viewer.as_ref()).await?)
}

pub async fn tagged(state: &AppState, tag: &str) -> AppResult<Vec<Post>> {
    Ok(state.reader.tagged(tag).await?)
}

pub async fn archive(state: &AppState) -> AppResult<Vec<YearGroup>> {
    Ok(state.reader.archive().await?)
}

pub async fn dashboard(state: &AppState) -> AppResult<Dashboard> {
    let user = state.session.current_user().ok_or(AppError::Unauthorized)?;
    Ok(state.reader.dashboard(Some(&user)).await?)
}

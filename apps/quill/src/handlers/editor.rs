//! Post editor and comment handlers.

use quill_core::domain::{Comment, Post, PostDraft, parse_tags};
use quill_shared::PostForm;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Editor form to domain draft.
pub fn draft_from_form(form: PostForm) -> PostDraft {
    PostDraft {
        title: form.title.trim().to_string(),
        content: form.content,
        excerpt: Some(form.excerpt),
        cover_image: Some(form.cover_image),
        category: form.category.trim().to_string(),
        tags: parse_tags(&form.tags),
        is_published: form.is_published,
    }
    .normalized()
}

/// Prefill the editor form from a stored post.
pub fn form_from_post(post: &Post) -> PostForm {
    let draft = post.to_draft();
    PostForm {
        title: draft.title,
        content: draft.content,
        excerpt: draft.excerpt.unwrap_or_default(),
        cover_image: draft.cover_image.unwrap_or_default(),
        category: draft.category,
        tags: draft.tags.join(", "),
        is_published: draft.is_published,
    }
}

/// Load a post the session user may edit.
pub async fn load(state: &AppState, id: &str) -> AppResult<PostForm> {
    let user = state.session.current_user();
    let post = state.editor.load_for_edit(id, user.as_ref()).await?;
    Ok(form_from_post(&post))
}

pub async fn create(state: &AppState, form: PostForm) -> AppResult<Post> {
    let user = state.session.current_user().ok_or(AppError::Unauthorized)?;
    form.validate()?;
    Ok(state.editor.create(draft_from_form(form), Some(&user)).await?)
}

pub async fn update(state: &AppState, id: &str, form: PostForm) -> AppResult<Post> {
    let user = state.session.current_user().ok_or(AppError::Unauthorized)?;
    form.validate()?;
    Ok(state
        .editor
        .update(id, draft_from_form(form), Some(&user))
        .await?)
}

pub async fn delete(state: &AppState, id: &str) -> AppResult<()> {
    let user = state.session.current_user();
    state.editor.delete(id, user.as_ref()).await?;
    Ok(())
}

pub async fn comment(state: &AppState, post_id: &str, content: &str) -> AppResult<Comment> {
    let user = state.session.current_user();
    Ok(state
        .reader
        .add_comment(post_id, content, user.as_ref())
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_from_form_parses_tags_and_blanks() {
        let form = PostForm {
            title: " Hello ".to_string(),
            content: "Body".to_string(),
            excerpt: "  ".to_string(),
            cover_image: String::new(),
            category: "Career".to_string(),
            tags: "rust, , cli".to_string(),
            is_published: true,
        };
        let draft = draft_from_form(form);
        assert_eq!(draft.title, "Hello");
        assert_eq!(draft.excerpt, None);
        assert_eq!(draft.cover_image, None);
        assert_eq!(draft.tags, vec!["rust", "cli"]);
        assert!(draft.is_published);
    }
}

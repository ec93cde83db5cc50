//! Plain-text rendering of posts, comments and the session.

use quill_core::SessionState;
use quill_core::archive::YearGroup;
use quill_core::domain::{Comment, Post};
use quill_core::filter::category_slug;
use quill_core::reader::{Dashboard, PostDetail};
use quill_shared::{CommentView, PostCard, SessionView};

pub fn post_card(post: &Post) -> PostCard {
    PostCard {
        id: post.id.clone(),
        title: post.title.clone(),
        excerpt: post.excerpt.clone(),
        category: post.category.clone(),
        tags: post.tags.clone(),
        author_name: post.author.name.clone(),
        published_at: post.published_at.to_string(),
        is_published: post.is_published,
    }
}

pub fn comment_view(comment: &Comment) -> CommentView {
    CommentView {
        author_name: comment.author.name.clone(),
        created_at: comment.created_at.to_string(),
        content: comment.content.clone(),
    }
}

pub fn session_view(state: &SessionState) -> SessionView {
    match state {
        SessionState::Anonymous => SessionView::Anonymous,
        SessionState::Pending => SessionView::Pending,
        SessionState::Authenticated(user) => SessionView::Authenticated {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        },
    }
}

fn card_lines(card: &PostCard) -> String {
    let mut out = format!(
        "[{}] {}\n    {} | {} | {}\n    {}",
        card.id, card.title, card.category, card.author_name, card.published_at, card.excerpt
    );
    if !card.tags.is_empty() {
        out.push_str(&format!("\n    #{}", card.tags.join(" #")));
    }
    out
}

pub fn print_posts(posts: &[Post]) {
    if posts.is_empty() {
        println!("No posts found.");
        return;
    }
    for post in posts {
        println!("{}\n", card_lines(&post_card(post)));
    }
}

pub fn print_categories(categories: &[String], selected: Option<&str>) {
    let all = if selected.is_none() { "*" } else { " " };
    println!("{all} All");
    for category in categories {
        let mark = if selected == Some(category.as_str()) { "*" } else { " " };
        println!("{mark} {category} ({})", category_slug(category));
    }
}

pub fn print_detail(detail: &PostDetail) {
    let post = &detail.post;
    println!("{}", post.title);
    println!(
        "By {} | {} | {} | updated {}",
        post.author.name, post.category, post.published_at, post.updated_at
    );
    if !post.tags.is_empty() {
        println!("Tags: {}", post.tags.join(", "));
    }
    if let Some(cover) = &post.cover_image {
        println!("Cover: {cover}");
    }
    if !post.is_published {
        println!("(draft)");
    }
    if detail.is_owner {
        println!("You wrote this post: `edit {}` or `delete {}`", post.id, post.id);
    }
    println!("\n{}\n", post.content);

    println!("Comments ({})", detail.comments.len());
    for comment in detail.comments.iter().map(comment_view) {
        println!("- {} on {}: {}", comment.author_name, comment.created_at, comment.content);
    }
}

pub fn print_dashboard(dashboard: &Dashboard) {
    println!(
        "Total posts: {}  Published: {}  Drafts: {}",
        dashboard.total(),
        dashboard.published(),
        dashboard.drafts()
    );
    if dashboard.posts.is_empty() {
        println!("You have not written any posts yet.");
        return;
    }
    for card in dashboard.posts.iter().map(post_card) {
        println!(
            "[{}] {} ({}) {} {}",
            card.id,
            card.title,
            card.status(),
            card.category,
            card.published_at
        );
    }
}

pub fn print_archive(groups: &[YearGroup]) {
    if groups.is_empty() {
        println!("No posts found.");
        return;
    }
    for group in groups {
        println!("{} ({})", group.year, group.posts.len());
        for post in &group.posts {
            println!("  {} [{}] {}", post.published_at, post.id, post.title);
        }
    }
}

pub fn print_session(state: &SessionState) {
    println!("{}", session_view(state).label());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use quill_core::domain::User;

    fn post() -> Post {
        let day = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
        Post {
            id: "1".to_string(),
            title: "Getting Started".to_string(),
            content: "# Hi".to_string(),
            excerpt: "Intro".to_string(),
            cover_image: None,
            tags: vec!["React".to_string(), "JavaScript".to_string()],
            category: "Programming".to_string(),
            author: User::new("1", "John Doe", "john@example.com"),
            published_at: day,
            updated_at: day,
            is_published: false,
        }
    }

    #[test]
    fn test_post_card_flattens_author_and_dates() {
        let card = post_card(&post());
        assert_eq!(card.author_name, "John Doe");
        assert_eq!(card.published_at, "2023-03-15");
        assert_eq!(card.status(), "Draft");
        assert_eq!(
            card_lines(&card),
            "[1] Getting Started\n    \
             Programming | John Doe | 2023-03-15\n    \
             Intro\n    \
             #React #JavaScript"
        );
    }

    #[test]
    fn test_session_view_from_state() {
        assert_eq!(session_view(&SessionState::Pending), SessionView::Pending);
        let user = User::new("1", "John Doe", "john@example.com");
        assert_eq!(
            session_view(&SessionState::Authenticated(user)).label(),
            "John Doe <john@example.com>"
        );
    }
}

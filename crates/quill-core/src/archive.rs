//! Archive view - posts grouped by publication year.

use chrono::Datelike;

use crate::domain::Post;

/// Posts published in one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGroup {
    pub year: i32,
    pub posts: Vec<Post>,
}

/// Group posts by publication year, newest year first.
/// Within a year the input order is kept.
pub fn group_by_year(posts: &[Post]) -> Vec<YearGroup> {
    let mut groups: Vec<YearGroup> = Vec::new();

    for post in posts {
        let year = post.published_at.year();
        match groups.iter_mut().find(|g| g.year == year) {
            Some(group) => group.posts.push(post.clone()),
            None => groups.push(YearGroup {
                year,
                posts: vec![post.clone()],
            }),
        }
    }

    groups.sort_by(|a, b| b.year.cmp(&a.year));
    groups
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::User;

    fn post(id: &str, published: &str) -> Post {
        let date = NaiveDate::parse_from_str(published, "%Y-%m-%d").unwrap();
        Post {
            id: id.to_string(),
            title: id.to_string(),
            content: String::new(),
            excerpt: String::new(),
            cover_image: None,
            tags: Vec::new(),
            category: "Programming".to_string(),
            author: User::new("1", "John Doe", "john@example.com"),
            published_at: date,
            updated_at: date,
            is_published: true,
        }
    }

    #[test]
    fn test_groups_newest_year_first() {
        let posts = vec![
            post("a", "2022-06-01"),
            post("b", "2023-03-15"),
            post("c", "2022-01-20"),
            post("d", "2024-11-02"),
        ];

        let groups = group_by_year(&posts);
        let years: Vec<i32> = groups.iter().map(|g| g.year).collect();
        assert_eq!(years, vec![2024, 2023, 2022]);

        let ids_2022: Vec<&str> = groups[2].posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids_2022, vec!["a", "c"]);
    }

    #[test]
    fn test_empty_archive() {
        assert!(group_by_year(&[]).is_empty());
    }
}

use serde::{Deserialize, Serialize};

/// User entity - an author, a commenter, or the session identity.
///
/// This is also the shape persisted as the session blob, so the field names
/// are part of the stored format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Email with the local part hidden, for log fields.
    pub fn masked_email(&self) -> String {
        mask_email(&self.email)
    }
}

/// Mask an email address to avoid PII in logs.
pub(crate) fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            let mut chars = local.chars();
            match (chars.next(), chars.next()) {
                (Some(first), Some(_)) => format!("{first}***{domain}"),
                _ => format!("***{domain}"),
            }
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_blob_shape() {
        let user = User::new("1", "John Doe", "john@example.com").with_avatar("https://a/b.jpg");
        let json: serde_json::Value = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "name": "John Doe",
                "email": "john@example.com",
                "avatar": "https://a/b.jpg",
            })
        );
    }

    #[test]
    fn test_avatar_omitted_when_absent() {
        let user = User::new("3", "Alex Johnson", "alex@example.com");
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("avatar"));

        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("john@example.com"), "j***@example.com");
        assert_eq!(mask_email("j@example.com"), "***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");

        let user = User::new("1", "John Doe", "john@example.com");
        assert_eq!(user.masked_email(), "j***@example.com");
    }
}

//! Form payloads and their caller-side validation.
//!
//! These checks run before anything reaches the session manager or the
//! editor; the messages are the ones shown to the reader.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum password length accepted by the registration form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Form validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please fill in all required fields")]
    MissingRequiredFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Login form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if blank(&self.email) || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }
}

/// Registration form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Checked in order: all fields present, passwords match, length.
    pub fn validate(&self) -> Result<(), FormError> {
        if blank(&self.name)
            || blank(&self.email)
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(FormError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}

/// Post editor form, with tags as one comma separated field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub cover_image: String,
    pub category: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub is_published: bool,
}

impl PostForm {
    /// Title, content and category are required.
    pub fn validate(&self) -> Result<(), FormError> {
        if blank(&self.title) || blank(&self.content) || blank(&self.category) {
            return Err(FormError::MissingRequiredFields);
        }
        Ok(())
    }
}

/// Categories offered by the editor's selector.
pub const EDITOR_CATEGORIES: [&str; 5] = [
    "Programming",
    "Web Development",
    "Technology",
    "Design",
    "Career",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn register(name: &str, password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            name: name.to_string(),
            email: "ada@example.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let ok = LoginForm {
            email: "demo@example.com".to_string(),
            password: "password".to_string(),
        };
        assert!(ok.validate().is_ok());

        let missing = LoginForm {
            email: "demo@example.com".to_string(),
            password: String::new(),
        };
        assert_eq!(missing.validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn test_register_checks_in_order() {
        assert!(register("Ada", "secret1", "secret1").validate().is_ok());
        assert_eq!(
            register("", "abc", "xyz").validate(),
            Err(FormError::MissingFields)
        );
        assert_eq!(
            register("Ada", "abc", "xyz").validate(),
            Err(FormError::PasswordMismatch)
        );
        assert_eq!(
            register("Ada", "abc", "abc").validate(),
            Err(FormError::PasswordTooShort { min: 6 })
        );
    }

    #[test]
    fn test_password_too_short_message() {
        let err = register("Ada", "abc", "abc").validate().unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }

    #[test]
    fn test_post_form_required_fields() {
        let mut form = PostForm {
            title: "Title".to_string(),
            content: "Body".to_string(),
            category: "Design".to_string(),
            ..PostForm::default()
        };
        assert!(form.validate().is_ok());

        form.content = " ".to_string();
        assert_eq!(form.validate(), Err(FormError::MissingRequiredFields));
    }

    #[test]
    fn test_post_form_optional_fields_default() {
        let form: PostForm =
            serde_json::from_str(r#"{"title":"T","content":"C","category":"Career"}"#).unwrap();
        assert_eq!(form.tags, "");
        assert!(!form.is_published);
    }
}

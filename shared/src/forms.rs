//! Client-side validation. Every form validates synchronously on submit and
//! reports a field-keyed error map; an empty map means the form may be sent.

use std::collections::BTreeMap;

use crate::{
    session::Role, text, Article, ArticlePayload, CategoryPayload, LoginRequest, RegisterRequest,
};

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Input that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Article title.
    Title,
    /// Article body.
    Content,
    /// Article category selector.
    CategoryId,
    /// Thumbnail picker.
    Image,
    /// Category name.
    Name,
    /// Login and register username.
    Username,
    /// Login and register password.
    Password,
    /// Register role selector.
    Role,
}

impl Field {
    /// Wire name, also used for element ids.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
            Field::CategoryId => "categoryId",
            Field::Image => "image",
            Field::Name => "name",
            Field::Username => "username",
            Field::Password => "password",
            Field::Role => "role",
        }
    }
}

/// One message per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// No errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Message for `field`.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether `field` failed.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop one field's error, e.g. once the user picked a file.
    pub fn without(&self, field: Field) -> Self {
        let mut next = self.clone();
        next.0.remove(&field);
        next
    }

    /// Whether the form may be sent.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn into_result<T>(self, ok: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(ok())
        } else {
            Err(self)
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Article create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleForm {
    /// Title input.
    pub title: String,
    /// HTML from the editor.
    pub content: String,
    /// Selected category id, empty when none.
    pub category_id: String,
}

impl ArticleForm {
    /// Prefill from an existing article.
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            category_id: article
                .resolved_category_id()
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Editors leave markup such as `<p><br></p>` behind when emptied, so
    /// content counts as blank when it has no text once tags are stripped.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if is_blank(&self.title) {
            errors.insert(Field::Title, "Title is required.");
        }
        if text::is_blank_html(&self.content) {
            errors.insert(Field::Content, "Content is required.");
        }
        if is_blank(&self.category_id) {
            errors.insert(Field::CategoryId, "Category must be selected.");
        }
        errors
    }

    /// Request body for a validated form and the final image URL.
    pub fn payload(&self, image_url: String) -> ArticlePayload {
        ArticlePayload {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
            category_id: self.category_id.trim().to_string(),
            image_url,
        }
    }
}

/// Category add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    /// Name input.
    pub name: String,
}

impl CategoryForm {
    /// Payload with the name trimmed, or the field errors.
    pub fn validate(&self) -> Result<CategoryPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        if is_blank(&self.name) {
            errors.insert(Field::Name, "Category name is required.");
        }
        errors.into_result(|| CategoryPayload {
            name: self.name.trim().to_string(),
        })
    }
}

fn check_password(errors: &mut FieldErrors, password: &str) {
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(Field::Password, "Password must be at least 6 characters");
    }
}

/// Sign-in form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Username input.
    pub username: String,
    /// Password input.
    pub password: String,
}

impl LoginForm {
    /// Request with the username trimmed, or the field errors.
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        if is_blank(&self.username) {
            errors.insert(Field::Username, "Please enter your username");
        }
        check_password(&mut errors, &self.password);
        errors.into_result(|| LoginRequest {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    /// Username input, sent as typed.
    pub username: String,
    /// Password input.
    pub password: String,
    /// Raw value of the role selector; empty until the user picks one.
    pub role: String,
}

impl RegisterForm {
    /// Request with a parsed role, or the field errors.
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.username.is_empty() {
            errors.insert(Field::Username, "Please enter your username");
        }
        check_password(&mut errors, &self.password);
        let role = Role::parse(&self.role);
        if role.is_none() {
            errors.insert(Field::Role, "Please select your role");
        }
        match role {
            Some(role) if errors.is_empty() => Ok(RegisterRequest {
                username: self.username.clone(),
                password: self.password.clone(),
                role,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_article_reports_every_field() {
        let errors = ArticleForm::default().validate();
        assert_eq!(errors.get(Field::Title), Some("Title is required."));
        assert_eq!(errors.get(Field::Content), Some("Content is required."));
        assert_eq!(errors.get(Field::CategoryId), Some("Category must be selected."));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn editor_leftover_markup_is_blank_content() {
        let form = ArticleForm {
            title: "T".into(),
            content: "<p><br></p>".into(),
            category_id: "1".into(),
        };
        assert!(form.validate().contains(Field::Content));
    }

    #[test]
    fn payload_trims_title_and_keeps_html() {
        let form = ArticleForm {
            title: "  Hello ".into(),
            content: "<p>x</p>".into(),
            category_id: " 3 ".into(),
        };
        assert!(form.validate().is_empty());
        let payload = form.payload("https://img/x.png".into());
        assert_eq!(payload.title, "Hello");
        assert_eq!(payload.category_id, "3");
        assert_eq!(payload.content, "<p>x</p>");
    }

    #[test]
    fn category_name_is_required() {
        let err = CategoryForm {
            name: "   ".into(),
        }
        .validate()
        .expect_err("blank name");
        assert_eq!(err.get(Field::Name), Some("Category name is required."));
    }

    #[test]
    fn login_rules() {
        let err = LoginForm {
            username: " ".into(),
            password: "12345".into(),
        }
        .validate()
        .expect_err("invalid");
        assert!(err.contains(Field::Username));
        assert!(err.contains(Field::Password));

        let ok = LoginForm {
            username: " bob ".into(),
            password: "123456".into(),
        }
        .validate()
        .expect("valid");
        assert_eq!(ok.username, "bob");
    }

    #[test]
    fn register_requires_known_role() {
        let err = RegisterForm {
            username: "amy".into(),
            password: "secret1".into(),
            role: String::new(),
        }
        .validate()
        .expect_err("no role");
        assert_eq!(err.get(Field::Role), Some("Please select your role"));

        let ok = RegisterForm {
            username: "amy".into(),
            password: "secret1".into(),
            role: "User".into(),
        }
        .validate()
        .expect("valid");
        assert_eq!(ok.role, Role::User);
    }

    #[test]
    fn without_clears_single_field() {
        let errors = ArticleForm::default().validate().without(Field::Title);
        assert!(!errors.contains(Field::Title));
        assert_eq!(errors.len(), 2);
    }
}

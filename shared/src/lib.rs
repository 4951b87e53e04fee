//! Wire models and client-side logic for the blogdesk front-end.
//!
//! Everything here is platform independent so it can be unit tested on the
//! host; the Yew application in `frontend` only adds the browser adapters.

pub mod debounce;
pub mod draft;
pub mod error;
pub mod favorites;
pub mod forms;
pub mod guard;
pub mod list_query;
pub mod pagination;
pub mod request_seq;
pub mod session;
pub mod storage;
pub mod submit;
pub mod text;
pub mod theme;

use serde::{Deserialize, Deserializer, Serialize};

pub use session::Role;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Int(value) => value.to_string(),
            RawId::Float(value) => value.to_string(),
        }
    }
}

/// The API hands out ids as JSON strings on some endpoints and numbers on
/// others; both become `String` on our side.
pub(crate) fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

pub(crate) fn opt_id_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?
        .map(String::from)
        .filter(|id| !id.is_empty()))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// 文章数据模型
/// Article as returned by `GET /articles` and `GET /articles/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Server id, normalised to a string.
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    /// Headline.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Rich text body (HTML).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    /// Thumbnail URL; empty when the article has none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,
    /// ISO 8601 creation time.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
    /// Flat category id; some endpoints only send the nested object.
    #[serde(default, deserialize_with = "opt_id_from_any")]
    pub category_id: Option<String>,
    /// Nested category summary.
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Author reference.
    #[serde(default)]
    pub user: Option<Author>,
}

impl Article {
    /// Category id from the flat field, falling back to the nested object.
    pub fn resolved_category_id(&self) -> Option<&str> {
        self.category_id
            .as_deref()
            .or_else(|| self.category.as_ref().and_then(|c| c.id.as_deref()))
    }

    /// Non-blank category name, if the article carries one.
    pub fn category_name(&self) -> Option<&str> {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.trim().is_empty())
    }

    /// Non-blank author username.
    pub fn author_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|u| u.username.as_str())
            .filter(|name| !name.trim().is_empty())
    }

    /// Up to `limit` other articles from `pool` sharing this article's
    /// category, in pool order.
    pub fn related(&self, pool: &[Article], limit: usize) -> Vec<Article> {
        let Some(category) = self.related_key() else {
            return Vec::new();
        };
        pool.iter()
            .filter(|other| other.id != self.id)
            .filter(|other| other.related_key() == Some(category))
            .take(limit)
            .cloned()
            .collect()
    }

    fn related_key(&self) -> Option<&str> {
        self.resolved_category_id().or_else(|| self.category_name())
    }
}

/// Nested category summary embedded in an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Category id, when the server includes it.
    #[serde(default, deserialize_with = "opt_id_from_any")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// Author reference embedded in an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Author's login name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
}

/// Row of `GET /categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Server id, normalised to a string.
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// ISO 8601 creation time.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
}

/// `GET /auth/profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Login name.
    pub username: String,
    /// Raw role name as the server reports it.
    #[serde(default)]
    pub role: String,
}

/// Body of `POST /articles` and `PUT /articles/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    /// Trimmed title.
    pub title: String,
    /// HTML body.
    pub content: String,
    /// Selected category id.
    pub category_id: String,
    /// Uploaded or kept thumbnail URL; empty clears it.
    pub image_url: String,
}

/// Body of `POST /categories` and `PUT /categories/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPayload {
    /// Trimmed category name.
    pub name: String,
}

/// `POST /upload` reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Public URL of the stored image.
    pub image_url: String,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Trimmed username.
    pub username: String,
    /// Password as typed.
    pub password: String,
}

/// `POST /auth/login` reply. Both fields are optional on the wire so a
/// partial reply can be rejected with a proper error instead of a parse
/// failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Bearer token.
    #[serde(default)]
    pub token: Option<String>,
    /// Role name, `Admin` or `User`.
    #[serde(default)]
    pub role: Option<String>,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    /// Trimmed username.
    pub username: String,
    /// Password as typed.
    pub password: String,
    /// Requested role.
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, category: &str) -> Article {
        Article {
            id: id.to_string(),
            title: format!("title {id}"),
            content: String::new(),
            image_url: String::new(),
            created_at: String::new(),
            category_id: Some(category.to_string()),
            category: None,
            user: None,
        }
    }

    #[test]
    fn decodes_article_with_numeric_ids_and_nested_refs() {
        let raw = r#"{
            "id": 42,
            "title": "Hello",
            "content": "<p>Body</p>",
            "imageUrl": null,
            "createdAt": "2025-02-01T10:00:00.000Z",
            "category": { "id": "c-1", "name": "Design" },
            "user": { "username": "alice" }
        }"#;
        let article: Article = serde_json::from_str(raw).expect("decode article");
        assert_eq!(article.id, "42");
        assert_eq!(article.image_url, "");
        assert_eq!(article.resolved_category_id(), Some("c-1"));
        assert_eq!(article.category_name(), Some("Design"));
        assert_eq!(article.author_name(), Some("alice"));
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let payload = ArticlePayload {
            title: "t".into(),
            content: "c".into(),
            category_id: "7".into(),
            image_url: String::new(),
        };
        let json = serde_json::to_value(&payload).expect("encode payload");
        assert_eq!(json["categoryId"], "7");
        assert_eq!(json["imageUrl"], "");
    }

    #[test]
    fn related_excludes_self_and_other_categories() {
        let current = article("1", "a");
        let pool = vec![
            article("1", "a"),
            article("2", "b"),
            article("3", "a"),
            article("4", "a"),
            article("5", "a"),
            article("6", "a"),
        ];
        let ids: Vec<_> = current
            .related(&pool, 3)
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["3", "4", "5"]);
    }

    #[test]
    fn related_falls_back_to_category_name() {
        let mut current = article("1", "x");
        current.category_id = None;
        current.category = Some(CategoryRef {
            id: None,
            name: "News".into(),
        });
        let mut other = current.clone();
        other.id = "2".into();
        assert_eq!(current.related(&[other], 3).len(), 1);
    }
}

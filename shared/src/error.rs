//! Error types shared by the API client, submit pipeline and storage.

use thiserror::Error;

use crate::forms::FieldErrors;

/// Failure of one REST call. Every variant is terminal for the user action
/// that triggered it; nothing retries automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got a response.
    #[error("Network error: {0}")]
    Network(String),
    /// Non-success status other than 401/403/404.
    #[error("HTTP error: {status}")]
    Http {
        /// Response status code.
        status: u16,
        /// `message` or `error` field of the body, when present.
        message: Option<String>,
    },
    /// Body did not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
    /// 404.
    #[error("Resource not found")]
    NotFound,
    /// 401 or 403.
    #[error("Not authorized")]
    Unauthorized,
    /// Success status with an unusable body.
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Map a non-success status and its body to an error. The API reports
    /// failures as `{"message": ...}` (sometimes an array) or `{"error": ...}`.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => ApiError::Http {
                status,
                message: server_message(body),
            },
        }
    }

    /// Server-provided message, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http {
                message, ..
            } => message.as_deref(),
            _ => None,
        }
    }

    /// Text suitable for a toast or inline banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            },
            ApiError::Http {
                ..
            } => self
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| "The server could not complete the request.".to_string()),
            ApiError::Parse(_) | ApiError::InvalidResponse(_) => {
                "The server returned an unexpected response.".to_string()
            },
            ApiError::NotFound => "The requested item was not found.".to_string(),
            ApiError::Unauthorized => "Your session is not allowed to do that.".to_string(),
        }
    }
}

fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let field = value.get("message").or_else(|| value.get("error"))?;
    let text = match field {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    let text = text.trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Failure of the article submit pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// The form did not validate; nothing was sent.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),
    /// Thumbnail upload failed; the article was not saved.
    #[error("image upload failed: {0}")]
    Upload(#[source] ApiError),
    /// Create or update request failed.
    #[error("saving article failed: {0}")]
    Save(#[source] ApiError),
}

impl SubmitError {
    /// Per-field errors of a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Failure of the key/value store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No backing store (private mode, no window).
    #[error("storage is not available")]
    Unavailable,
    /// The write was refused, usually a quota.
    #[error("storage rejected the write: {0}")]
    Rejected(String),
    /// A stored value failed to parse.
    #[error("stored value is not valid JSON: {0}")]
    Corrupt(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_message_string_and_array() {
        let err = ApiError::from_status(400, r#"{"message":"Title already used"}"#);
        assert_eq!(err.user_message(), "Title already used");

        let err = ApiError::from_status(422, r#"{"message":["a","b"]}"#);
        assert_eq!(err.server_message(), Some("a, b"));

        let err = ApiError::from_status(500, r#"{"error":"boom"}"#);
        assert_eq!(err.server_message(), Some("boom"));
    }

    #[test]
    fn falls_back_when_body_is_not_json() {
        let err = ApiError::from_status(502, "<html>bad gateway</html>");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.user_message(), "The server could not complete the request.");
    }

    #[test]
    fn auth_and_missing_statuses_have_dedicated_variants() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404, "{}"), ApiError::NotFound);
    }
}

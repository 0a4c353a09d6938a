//! Error types shared by the REST client, the managers and the forms.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Result type for backend operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Backend call failures, classified by how the UI reacts to them.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
pub enum ApiError {
    /// Request never reached the server or the response was unreadable
    #[error("Network error: {0}")]
    Network(String),

    /// 401, or an admin call made without a stored credential
    #[error("Authentication required")]
    Unauthorized,

    /// 403
    #[error("Admin access required")]
    Forbidden,

    /// 400/422 with field errors
    #[error("{message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },

    #[error("Not found")]
    NotFound,

    /// 5xx and any other non-2xx status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// 2xx with a body that does not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response. The body is parsed as JSON first and
    /// falls back to raw text.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            400 | 422 => ApiError::Validation {
                message: non_empty_or(backend_message(body), || format!("Request rejected ({status})")),
                fields: field_errors(body),
            },
            _ => ApiError::Server {
                status,
                message: non_empty_or(backend_message(body), || format!("Request failed ({status})")),
            },
        }
    }

    /// True when the stored credential should be dropped and the user sent
    /// back to the login page.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

fn non_empty_or(message: String, fallback: impl FnOnce() -> String) -> String {
    if message.trim().is_empty() {
        fallback()
    } else {
        message
    }
}

/// Extract the human-readable message from an error body.
///
/// Understands `{"errors": {"Field": ["msg", ...]}}`, `{"errors": ["msg"]}`,
/// `{"title": ...}`, `{"message": ...}` and JSON strings. Anything else is
/// returned as trimmed raw text.
pub fn backend_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => {
            let from_errors = match map.get("errors") {
                Some(Value::Object(errors)) => errors
                    .values()
                    .flat_map(messages_of)
                    .collect::<Vec<_>>()
                    .join("; "),
                Some(other) => messages_of(other).join("; "),
                None => String::new(),
            };
            if !from_errors.is_empty() {
                return from_errors;
            }

            ["title", "message", "detail", "error"]
                .iter()
                .find_map(|key| match map.get(*key) {
                    Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
                    _ => None,
                })
                .unwrap_or_else(|| body.trim().to_string())
        }
        Ok(Value::String(s)) => s,
        _ => body.trim().to_string(),
    }
}

fn field_errors(body: &str) -> BTreeMap<String, Vec<String>> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("errors") {
            Some(Value::Object(errors)) => errors
                .iter()
                .map(|(field, value)| (field.clone(), messages_of(value)))
                .collect(),
            _ => BTreeMap::new(),
        },
        _ => BTreeMap::new(),
    }
}

fn messages_of(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Client-side form validation failures, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn remove(&mut self, field: &str) {
        self.fields.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> std::result::Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.fields.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_map_is_flattened() {
        let body = r#"{"title":"One or more validation errors occurred.","errors":{"Name":["The Name field is required."],"Price":["Price must be positive."]}}"#;
        assert_eq!(
            backend_message(body),
            "The Name field is required.; Price must be positive."
        );
    }

    #[test]
    fn test_title_used_without_errors() {
        assert_eq!(backend_message(r#"{"title":"Conflict"}"#), "Conflict");
        assert_eq!(backend_message(r#"{"message":"Invalid credentials"}"#), "Invalid credentials");
    }

    #[test]
    fn test_plain_text_falls_back_to_raw() {
        assert_eq!(backend_message("  Package not found \n"), "Package not found");
        assert_eq!(backend_message(r#""quoted""#), "quoted");
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, "nope"), ApiError::Forbidden);
        assert_eq!(ApiError::from_status(404, ""), ApiError::NotFound);

        match ApiError::from_status(400, r#"{"errors":{"Email":["Bad email"]}}"#) {
            ApiError::Validation { message, fields } => {
                assert_eq!(message, "Bad email");
                assert_eq!(fields["Email"], vec!["Bad email".to_string()]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        assert_eq!(
            ApiError::from_status(500, ""),
            ApiError::Server {
                status: 500,
                message: "Request failed (500)".to_string()
            }
        );
    }

    #[test]
    fn test_validation_errors_keep_first_message() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "Name is required");
        errors.add("name", "ignored");
        errors.add("price", "Price must be a number");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.to_string(), "Name is required; Price must be a number");
        assert!(errors.into_result().is_err());
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}

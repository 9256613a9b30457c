use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A failed request against the workshop backend.
///
/// Network failures, non-success statuses and undecodable bodies all end up here.
/// The message is the backend's `detail` when it sent one.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Error {
    message: String,
    status: Option<StatusCode>,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub(crate) fn with_status(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }

    /// Builds the error for a non-success response from its raw body.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|mut v| match v.get_mut("detail").map(Value::take) {
                Some(Value::String(detail)) => Some(detail),
                Some(Value::Null) | None => None,
                Some(other) => Some(other.to_string()),
            })
            .unwrap_or_else(|| format!("request failed with HTTP status {}", status.as_u16()));

        Self::with_status(message, status)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the response, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self {
            message: e.to_string(),
            status: e.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string_becomes_message() {
        let err = Error::from_response(StatusCode::NOT_FOUND, r#"{"detail": "not found"}"#);
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let err = Error::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail": [{"loc": ["body", "title"], "msg": "field required"}]}"#,
        );
        assert!(err.message().contains("field required"));
    }

    #[test]
    fn non_json_body_mentions_status() {
        let err = Error::from_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn json_without_detail_mentions_status() {
        let err = Error::from_response(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error": "boom"}"#);
        assert!(err.to_string().contains("500"));
    }
}

//! Errors raised while talking to the exam backend

use serde::Deserialize;

/// Status code the backend uses for missing or rejected credentials
pub const STATUS_UNAUTHORIZED: u16 = 401;

/// Backend API error types
///
/// Failures are passed to the caller as they happened; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid request body: {0}")]
    Encode(String),
}

/// Error body shape returned by the backend (`{"detail": "..."}`)
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: serde_json::Value,
}

impl ApiError {
    /// Whether the backend rejected the request's credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if *status == STATUS_UNAUTHORIZED)
    }

    /// Human readable message, preferring the backend's `detail` field
    pub fn message(&self) -> String {
        match self {
            ApiError::Status { body, .. } => serde_json::from_str::<ErrorDetail>(body)
                .ok()
                .and_then(|err| match err.detail {
                    serde_json::Value::String(detail) => Some(detail),
                    serde_json::Value::Null => None,
                    other => Some(other.to_string()),
                })
                .unwrap_or_else(|| self.to_string()),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unauthorized() {
        let err = ApiError::Status {
            status: 401,
            body: String::new(),
        };
        assert!(err.is_unauthorized());

        let err = ApiError::Status {
            status: 404,
            body: String::new(),
        };
        assert!(!err.is_unauthorized());
        assert!(!ApiError::Network("offline".to_string()).is_unauthorized());
    }

    #[test]
    fn test_message_prefers_backend_detail() {
        let err = ApiError::Status {
            status: 401,
            body: r#"{"detail": "Incorrect username or password"}"#.to_string(),
        };
        assert_eq!(err.message(), "Incorrect username or password");
    }

    #[test]
    fn test_message_formats_structured_detail() {
        let err = ApiError::Status {
            status: 422,
            body: r#"{"detail": [{"loc": ["body", "ects"]}]}"#.to_string(),
        };
        assert!(err.message().contains("ects"));
    }

    #[test]
    fn test_message_falls_back_to_display() {
        let err = ApiError::Status {
            status: 500,
            body: "<html>oops</html>".to_string(),
        };
        assert_eq!(err.message(), "Request failed with status 500");

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.message(), "Network error: connection refused");
    }
}

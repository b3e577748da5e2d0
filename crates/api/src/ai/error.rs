//! Error types for the AI provider client.

use thiserror::Error;

/// Errors that can occur when talking to the AI provider.
///
/// None of these reach a client raw: the chat flow degrades to a fixed
/// fallback reply, and the order-summary flow degrades to a fixed summary.
#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned an error payload.
    #[error("API error ({error_type}): {message}")]
    Api {
        /// Error type from the provider, when given.
        error_type: String,
        /// Error message.
        message: String,
    },

    /// Rate limited by the provider.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication failed.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Failed to parse the provider's reply.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Error response body from the provider.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Nested error details.
    pub error: ApiErrorBody,
}

/// Nested error details.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorBody {
    /// Error message.
    pub message: String,
    /// Error type, when the provider includes one.
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_error_display() {
        let err = AiError::RateLimited(60);
        assert_eq!(err.to_string(), "rate limited, retry after 60 seconds");

        let err = AiError::Api {
            error_type: "invalid_request_error".to_string(),
            message: "model not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (invalid_request_error): model not found"
        );
    }

    #[test]
    fn test_api_error_deserialization() {
        let json = r#"{
            "error": {
                "message": "Invalid API key",
                "type": "authentication_error"
            }
        }"#;

        let response: ApiErrorResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.error.message, "Invalid API key");
        assert_eq!(
            response.error.error_type.as_deref(),
            Some("authentication_error")
        );
    }

    #[test]
    fn test_api_error_without_type() {
        let json = r#"{"error": {"message": "boom"}}"#;
        let response: ApiErrorResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.error.error_type, None);
    }
}

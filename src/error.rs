//! Error types for the chat proxy
//!
//! Every failure ends up as a reply envelope; nothing escapes a handler raw.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ChatResponse;

pub const METHOD_NOT_ALLOWED_REPLY: &str = "Method not allowed";
pub const INVALID_MESSAGE_REPLY: &str = "No valid message provided.";
pub const UPSTREAM_ERROR_REPLY: &str = "Groq API error occurred.";
pub const SERVER_EXCEPTION_REPLY: &str = "Server exception occurred while processing the request.";

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("request did not carry a valid message")]
    InvalidMessage,

    #[error("upstream returned HTTP {status}")]
    Upstream { status: u16, body: String },

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not decode upstream body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::MethodNotAllowed(method) => {
                tracing::warn!(%method, "rejected non-POST request");
                (
                    StatusCode::METHOD_NOT_ALLOWED,
                    ChatResponse::new(METHOD_NOT_ALLOWED_REPLY),
                )
            }
            Self::InvalidMessage => {
                tracing::warn!("rejected request without a usable message");
                (
                    StatusCode::BAD_REQUEST,
                    ChatResponse::new(INVALID_MESSAGE_REPLY),
                )
            }
            Self::Upstream { status, body } => {
                tracing::error!(upstream_status = *status, "upstream API error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ChatResponse::with_debug(UPSTREAM_ERROR_REPLY, body.clone()),
                )
            }
            Self::Transport(_) | Self::Decode(_) => {
                tracing::error!(error = %self, "unexpected failure while proxying");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ChatResponse::new(SERVER_EXCEPTION_REPLY),
                )
            }
        };

        let mut response = (status, Json(body)).into_response();
        if matches!(self, Self::MethodNotAllowed(_)) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}

/// Startup configuration errors
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_method_not_allowed_response() {
        let response = AppError::MethodNotAllowed("GET".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST");
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "reply": "Method not allowed" })
        );
    }

    #[tokio::test]
    async fn test_invalid_message_response() {
        let response = AppError::InvalidMessage.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "reply": "No valid message provided." })
        );
    }

    #[tokio::test]
    async fn test_upstream_response_carries_debug() {
        let err = AppError::Upstream {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "upstream returned HTTP 429");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "reply": "Groq API error occurred.", "debug": "rate limited" })
        );
    }

    #[tokio::test]
    async fn test_decode_response_hides_detail() {
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = AppError::from(decode).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "reply": "Server exception occurred while processing the request." })
        );
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::Invalid {
            key: "PORT",
            expected: "port number",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "PORT must be a valid port number, got \"abc\"");
    }
}

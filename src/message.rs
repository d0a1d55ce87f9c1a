// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Inbound body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    /// Parse the raw body. Anything other than a JSON object carrying a
    /// non-empty string `message` is rejected.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| AppError::InvalidMessage)?;

        match value.get("message").and_then(Value::as_str) {
            Some(message) if !message.is_empty() => Ok(Self {
                message: message.to_string(),
            }),
            _ => Err(AppError::InvalidMessage),
        }
    }
}

/// Reply envelope returned on every path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

impl ChatResponse {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            debug: None,
        }
    }

    pub fn with_debug(reply: impl Into<String>, debug: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            debug: Some(debug.into()),
        }
    }
}

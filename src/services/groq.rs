// src/services/groq.rs
use std::time::Instant;

use serde::Serialize;
use serde_json::Value;

use crate::{config::Config, error::AppError};

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

/// Body of the upstream chat-completions call.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub temperature: f32,
    pub messages: [ChatMessage<'a>; 2],
}

/// Thin client over the Groq OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct GroqClient {
    http: reqwest::Client,
    config: Config,
}

impl GroqClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn build_request<'a>(&'a self, message: &'a str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &self.config.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: message,
                },
            ],
        }
    }

    /// Send one stateless completion request and return the parsed body.
    ///
    /// A non-2xx status becomes `AppError::Upstream` carrying the raw body text.
    pub async fn complete(&self, message: &str) -> Result<Value, AppError> {
        let started = Instant::now();

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&self.build_request(message))
            .send()
            .await?;

        let status = response.status();
        tracing::info!(
            upstream_status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "upstream responded"
        );

        if !status.is_success() {
            let body = response.text().await?;
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

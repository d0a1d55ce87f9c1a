use serde_json::Value;

use crate::{error::AppError, services::groq::GroqClient};

pub const FALLBACK_REPLY: &str = "Groq responded, but returned no usable text. \
     This may be due to quota limits or model availability.";

/// Pull `choices[0].message.content` out of an upstream body.
///
/// Any missing link, a non-string content, or blank text yields `None`.
pub fn extract_reply(body: &Value) -> Option<String> {
    let content = body
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()?
        .trim();

    (!content.is_empty()).then(|| content.to_string())
}

pub async fn generate_reply(client: &GroqClient, user_msg: &str) -> Result<String, AppError> {
    let body = client.complete(user_msg).await?;

    match extract_reply(&body) {
        Some(reply) => Ok(reply),
        None => {
            tracing::warn!("upstream returned no usable text, sending fallback");
            Ok(FALLBACK_REPLY.to_string())
        }
    }
}

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::Method,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4(), method = %method))]
pub async fn chat_handler(
    State(state): State<SharedState>,
    method: Method,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed(method.to_string()));
    }

    let payload = ChatRequest::from_body(&body)?;
    tracing::info!(message_len = payload.message.len(), "forwarding chat message");

    let reply = generate_reply(&state.groq, &payload.message).await?;

    Ok(Json(ChatResponse::new(reply)))
}

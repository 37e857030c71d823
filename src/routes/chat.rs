// src/routes/chat.rs
use axum::{Json, extract::State};
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let request_id = Uuid::new_v4();

    // Checked before any network activity.
    if state.config.api_key.is_empty() {
        tracing::warn!(%request_id, "rejecting chat request: API key is not configured");
        return Err(AppError::MissingApiKey);
    }

    tracing::debug!(%request_id, message_len = payload.message.len(), "relaying chat message");

    let reply = state
        .gemini
        .generate(&state.config.api_key, &payload.message)
        .await
        .inspect_err(|err| tracing::error!(%request_id, %err, "upstream call failed"))?;

    Ok(Json(ChatResponse::Success { reply }))
}

pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

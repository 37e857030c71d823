// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use thiserror::Error;

use crate::message::ChatResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("API key is not configured")]
    MissingApiKey,

    /// Upstream answered with an explicit error object (or nothing usable).
    #[error("API error: {message}")]
    Upstream {
        message: String,
        details: Option<Value>,
    },

    /// Network failure, timeout, or a response body we could not parse.
    #[error("Server error: {0}")]
    Transport(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let details = match &self {
            AppError::Upstream { details, .. } => details.clone(),
            _ => None,
        };
        let body = ChatResponse::Error {
            error: self.to_string(),
            details,
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Transport("upstream request timed out".to_string())
        } else {
            // without_url: the request URL carries the credential
            AppError::Transport(err.without_url().to_string())
        }
    }
}

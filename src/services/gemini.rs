// src/services/gemini.rs
//
// Client for the generative-language `generateContent` endpoint, plus the
// normalization of its heterogeneous success/error shapes into one stable
// contract. One call per request: no retries, no backoff, no caching.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Config;
use crate::error::AppError;

const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Upstream response body. Every level is optional so that both the success
/// shape (`candidates`) and the error shape (`error`) deserialize from the
/// same struct; anything else fails closed as a transport error.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub candidates: Option<Vec<Candidate>>,
    pub error: Option<UpstreamError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ReplyPart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplyPart {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamError {
    pub message: Option<String>,
}

/// Pure normalization step: a non-empty `candidates` array wins, otherwise
/// the upstream's own error message (with the raw body kept as diagnostics),
/// falling back to a fixed string when upstream said nothing usable.
pub fn extract_reply(response: &GenerateResponse, raw: &Value) -> Result<String, AppError> {
    if let Some(first) = response.candidates.as_deref().and_then(|c| c.first()) {
        let text = first
            .content
            .as_ref()
            .and_then(|content| content.parts.first())
            .map(|part| part.text.clone());
        return text.ok_or_else(|| {
            AppError::Transport("upstream candidate has no text part".to_string())
        });
    }

    let message = response
        .error
        .as_ref()
        .and_then(|e| e.message.clone())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string());

    Err(AppError::Upstream {
        message,
        details: Some(raw.clone()),
    })
}

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    /// Single-turn, history-free call. `message` is forwarded verbatim,
    /// including the empty string. The HTTP status is not inspected:
    /// upstream reports failures through the `error` object in the body,
    /// which `extract_reply` picks up for 4xx/5xx responses as well.
    pub async fn generate(&self, api_key: &str, message: &str) -> Result<String, AppError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let payload = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: message }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&payload)
            .send()
            .await?;

        let raw: Value = response.json().await?;
        let parsed: GenerateResponse = serde_json::from_value(raw.clone())
            .map_err(|e| AppError::Transport(format!("unexpected upstream response shape: {e}")))?;
        extract_reply(&parsed, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(raw: &Value) -> GenerateResponse {
        serde_json::from_value(raw.clone()).unwrap()
    }

    #[test]
    fn extracts_first_candidate_text() {
        let raw = json!({
            "candidates": [
                {"content": {"parts": [{"text": "hello"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        });
        let reply = extract_reply(&parse(&raw), &raw).unwrap();
        assert_eq!(reply, "hello");
    }

    #[test]
    fn upstream_error_message_is_surfaced() {
        let raw = json!({"error": {"message": "quota exceeded"}});
        let err = extract_reply(&parse(&raw), &raw).unwrap_err();
        match err {
            AppError::Upstream { message, details } => {
                assert_eq!(message, "quota exceeded");
                assert_eq!(details, Some(raw));
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn empty_body_falls_back_to_unknown_error() {
        let raw = json!({});
        let err = extract_reply(&parse(&raw), &raw).unwrap_err();
        assert!(err.to_string().contains("Unknown error"));
    }

    #[test]
    fn empty_candidates_array_is_not_a_success() {
        let raw = json!({"candidates": []});
        let err = extract_reply(&parse(&raw), &raw).unwrap_err();
        assert!(matches!(err, AppError::Upstream { .. }));
    }

    #[test]
    fn candidate_without_text_is_a_transport_error() {
        let raw = json!({"candidates": [{"content": {"parts": []}}]});
        let err = extract_reply(&parse(&raw), &raw).unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
    }

    #[test]
    fn extraction_is_idempotent() {
        let success = json!({"candidates": [{"content": {"parts": [{"text": "hi"}]}}]});
        let failure = json!({"error": {"message": "boom"}});

        for raw in [success, failure] {
            let parsed = parse(&raw);
            let first = extract_reply(&parsed, &raw).map_err(|e| e.to_string());
            let second = extract_reply(&parsed, &raw).map_err(|e| e.to_string());
            assert_eq!(first, second);
        }
    }
}

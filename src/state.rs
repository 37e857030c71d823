// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::gemini::GeminiClient;

pub type SharedState = Arc<AppState>;

/// Read-only per-process state; nothing in here is mutated after startup.
pub struct AppState {
    pub config: Config,
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let gemini = GeminiClient::new(&config)?;
        Ok(Self { config, gemini })
    }
}

// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::groq::GroqClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub groq: GroqClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            groq: GroqClient::new(config),
        }
    }
}

// src/state.rs
use std::sync::Arc;

use crate::services::ollama::InferenceClient;

pub type SharedState = Arc<AppState>;

/// Built once at startup and handed to the router. Nothing in it changes afterwards.
pub struct AppState {
    pub inference: Arc<dyn InferenceClient>,
}

impl AppState {
    pub fn new(inference: impl InferenceClient + 'static) -> Self {
        Self {
            inference: Arc::new(inference),
        }
    }
}

// src/services/ollama.rs
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message::ChatMessage;

pub const DEFAULT_OLLAMA_HOST: &str = "http://127.0.0.1:11434";

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("could not reach inference service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("inference service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected reply from inference service: {0}")]
    Decode(#[source] reqwest::Error),
}

/// What came back from a single chat call. `content` is `None` when the
/// reply carried no message or no content field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatCompletion {
    pub content: Option<String>,
}

/// Something that can turn a conversation into generated text.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<ChatCompletion, InferenceError>;
}

#[derive(Serialize)]
struct ApiChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct ApiChatResponse {
    #[serde(default)]
    message: Option<ApiMessage>,
}

#[derive(Deserialize)]
struct ApiMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    error: String,
}

/// Client for a local Ollama server's `/api/chat` endpoint.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    host: String,
}

impl OllamaClient {
    pub fn new(host: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            host: normalize_host(host),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new(DEFAULT_OLLAMA_HOST)
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<ChatCompletion, InferenceError> {
        let url = format!("{}/api/chat", self.host);
        tracing::debug!(%url, model, turns = messages.len(), "calling inference service");

        let res = self
            .http
            .post(&url)
            .json(&ApiChatRequest { model, messages, stream: false })
            .send()
            .await
            .map_err(InferenceError::Transport)?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            // Ollama reports failures as {"error": "..."}
            let body = serde_json::from_str::<ApiError>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            return Err(InferenceError::Status { status, body });
        }

        let body: ApiChatResponse = res.json().await.map_err(InferenceError::Decode)?;
        Ok(ChatCompletion {
            content: body.message.and_then(|m| m.content),
        })
    }
}

/// Accepts `http://host:port`, `host:port` or a bare `host`. Only a host
/// given without a scheme picks up Ollama's default port.
pub fn normalize_host(raw: &str) -> String {
    let raw = raw.trim().trim_end_matches('/');
    if raw.is_empty() {
        return DEFAULT_OLLAMA_HOST.to_string();
    }
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_string();
    }
    // A bracketed IPv6 literal only has a port if one follows the `]`.
    let has_port = match raw.strip_prefix('[') {
        Some(rest) => rest.split_once(']').is_some_and(|(_, tail)| tail.starts_with(':')),
        None => raw.contains(':'),
    };
    if has_port {
        format!("http://{raw}")
    } else {
        format!("http://{raw}:11434")
    }
}

// src/message.rs
use serde::{Deserialize, Serialize};

pub const NO_MESSAGE_PROVIDED: &str = "No message provided";
pub const SERVER_ERROR: &str = "Something went wrong on the server.";
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't generate a response.";
pub const BACKEND_RUNNING: &str = "Backend is running";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// The message with surrounding whitespace removed, or `None` if nothing is left.
    pub fn trimmed_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Body of every `/chat` reply. Exactly one of the two keys is ever present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatResponse {
    Response(String),
    Error(String),
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

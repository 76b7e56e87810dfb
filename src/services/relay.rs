// src/services/relay.rs
use serde_json::Value;

use crate::error::RelayError;
use crate::message::{ChatMessage, ChatRequest, FALLBACK_REPLY};
use crate::services::ollama::InferenceClient;

pub const MODEL: &str = "llama3.2:1b";

/// Parse a raw `/chat` body, forward the trimmed message to the model and
/// return the text to send back.
///
/// The body is parsed by hand instead of through an extractor so that bad
/// JSON ends up on the same error path as an upstream failure.
pub async fn relay_chat(client: &dyn InferenceClient, body: &[u8]) -> Result<String, RelayError> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(RelayError::NotAnObject);
    }
    let request: ChatRequest = serde_json::from_value(value)?;

    let Some(message) = request.trimmed_message() else {
        return Err(RelayError::EmptyMessage);
    };

    let completion = client.chat(MODEL, &[ChatMessage::user(message)]).await?;

    Ok(completion
        .content
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| FALLBACK_REPLY.to_string()))
}

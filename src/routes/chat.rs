use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};

use crate::{
    error::RelayError,
    message::{BACKEND_RUNNING, ChatResponse, StatusResponse},
    services::relay::relay_chat,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, RelayError> {
    // Buffering failures (e.g. an oversized body) go through the same error path.
    let body = body?;
    let reply = relay_chat(state.inference.as_ref(), &body).await?;
    Ok(Json(ChatResponse::Response(reply)))
}

pub async fn root_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: BACKEND_RUNNING.to_string(),
    })
}

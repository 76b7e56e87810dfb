// src/error.rs
use axum::{
    Json,
    extract::rejection::BytesRejection,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::{ChatResponse, NO_MESSAGE_PROVIDED, SERVER_ERROR};
use crate::services::ollama::InferenceError;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("no message provided")]
    EmptyMessage,

    #[error("could not read request body: {0}")]
    Body(#[from] BytesRejection),

    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("request body is not a JSON object")]
    NotAnObject,

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl RelayError {
    /// The text the client sees. Only an empty message gets a specific one.
    pub fn client_message(&self) -> &'static str {
        match self {
            RelayError::EmptyMessage => NO_MESSAGE_PROVIDED,
            _ => SERVER_ERROR,
        }
    }
}

// Errors are reported in-band, so the status is always 200.
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            RelayError::EmptyMessage => tracing::debug!("rejected chat request with empty message"),
            other => tracing::error!(error = %other, "Chat error"),
        }

        Json(ChatResponse::Error(self.client_message().to_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn internal_detail_is_hidden() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = RelayError::from(parse_err);
        assert!(err.to_string().contains("malformed"));
        assert_eq!(err.client_message(), SERVER_ERROR);
        assert_eq!(RelayError::NotAnObject.client_message(), SERVER_ERROR);
        assert_eq!(RelayError::EmptyMessage.client_message(), NO_MESSAGE_PROVIDED);
    }

    #[test]
    fn responds_with_ok_status() {
        let res = RelayError::EmptyMessage.into_response();
        assert_eq!(res.status(), StatusCode::OK);
    }
}

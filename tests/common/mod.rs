#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chat_relay::message::ChatMessage;
use chat_relay::routes::create_router;
use chat_relay::services::ollama::{ChatCompletion, InferenceClient, InferenceError};
use chat_relay::state::AppState;
use reqwest::StatusCode as UpstreamStatus;
use serde_json::Value;
use tower::util::ServiceExt;

#[derive(Clone, Copy)]
pub enum Script {
    Reply(&'static str),
    NoContent,
    Fail,
    Hang,
}

/// Records every call and answers according to its script.
pub struct ScriptedClient {
    script: Script,
    pub calls: Mutex<Vec<(String, Vec<ChatMessage>)>>,
}

impl ScriptedClient {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self { script, calls: Mutex::new(Vec::new()) })
    }

    pub fn calls(&self) -> Vec<(String, Vec<ChatMessage>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for ScriptedClient {
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<ChatCompletion, InferenceError> {
        self.calls.lock().unwrap().push((model.to_string(), messages.to_vec()));
        match self.script {
            Script::Reply(text) => Ok(ChatCompletion { content: Some(text.to_string()) }),
            Script::NoContent => Ok(ChatCompletion { content: None }),
            Script::Fail => Err(InferenceError::Status {
                status: UpstreamStatus::NOT_FOUND,
                body: "model 'llama3.2:1b' not found".to_string(),
            }),
            Script::Hang => std::future::pending().await,
        }
    }
}

pub fn app(client: Arc<ScriptedClient>) -> Router {
    let state = Arc::new(AppState { inference: client });
    create_router().with_state(state)
}

pub async fn post_chat(app: Router, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body_bytes).unwrap())
}

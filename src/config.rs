// src/config.rs
use std::net::SocketAddr;

use anyhow::Context;

use crate::services::ollama::{DEFAULT_OLLAMA_HOST, normalize_host};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub ollama_host: String,
}

impl Config {
    /// Reads `BIND_ADDR` and `OLLAMA_HOST`, falling back to local defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var("BIND_ADDR").ok(),
            std::env::var("OLLAMA_HOST").ok(),
        )
    }

    pub fn from_vars(bind_addr: Option<String>, ollama_host: Option<String>) -> anyhow::Result<Self> {
        let bind_addr = bind_addr
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse()
            .with_context(|| format!("invalid BIND_ADDR `{bind_addr}`"))?;

        let ollama_host = normalize_host(ollama_host.as_deref().unwrap_or(DEFAULT_OLLAMA_HOST));

        Ok(Self { bind_addr, ollama_host })
    }
}

// src/services/mod.rs
pub mod ollama;
pub mod relay;

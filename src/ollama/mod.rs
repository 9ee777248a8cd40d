//! Ollama model invocation
//!
//! Receives the finished prompt from the RAG pipeline and calls the model.

pub mod client;

pub use client::{GenerateRequest, GenerateResponse, OllamaClient, DEFAULT_GENERATE_URL, DEFAULT_MODEL};

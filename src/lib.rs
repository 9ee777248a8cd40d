//! ragbuddy - Local document question answering
//!
//! Retrieves the few local text documents most relevant to a question and
//! turns them into a prompt for a local Ollama model.
//!
//! # Architecture
//!
//! - **rag**: tokenizer, document store, Jaccard scoring, top-k retrieval,
//!   prompt builder, pipeline
//! - **ollama**: non-streaming generate client
//! - **html**: HTML to text conversion for the documents directory
//! - **cli**: arguments and TOML configuration

pub mod errors;

// Re-export commonly used types
pub use errors::{RagError, Result};

pub mod rag;
pub mod ollama;
pub mod html;
pub mod cli;

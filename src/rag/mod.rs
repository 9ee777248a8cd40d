// RAG (Retrieval-Augmented Generation) core
//
// Lexical retrieval over a directory of text files and deterministic prompt
// assembly. Nothing in here talks to the network.
//
// Components:
// - Tokenizer: lower-case word tokens
// - Document Store: directory -> documents with cached token sets
// - Similarity: Jaccard overlap of token sets
// - Retrieval: stable top-k ranking
// - Prompt: fixed answer template
// - Pipeline: end-to-end orchestration

pub mod tokenizer;
pub mod document;
pub mod store;
pub mod similarity;
pub mod retrieval;
pub mod prompt;
pub mod pipeline;

// Re-export key types
pub use document::{Document, Query};
pub use store::{DecodePolicy, DocumentStore, StoreConfig};
pub use retrieval::{Retriever, ScoredDocument, SearchParams};
pub use prompt::build_prompt;
pub use pipeline::{RagConfig, RagPipeline, RagResult};

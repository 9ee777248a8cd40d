// Retrieval engine module
pub mod engine;

pub use engine::{Retriever, ScoredDocument, SearchParams, DEFAULT_TOP_K};

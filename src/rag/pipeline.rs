// End-to-end RAG pipeline: load -> retrieve -> build prompt
use serde::Deserialize;
use std::path::PathBuf;

use crate::errors::Result;
use crate::rag::document::Document;
use crate::rag::prompt::build_prompt;
use crate::rag::retrieval::{Retriever, SearchParams};
use crate::rag::store::{DocumentStore, StoreConfig};

/// RAG pipeline configuration
///
/// Both parts are flattened, so a config section reads as
/// `top_k`, `extensions` and `decode_policy` side by side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RagConfig {
    /// Search parameters for retrieval
    #[serde(flatten)]
    pub search: SearchParams,
    /// Document loading configuration
    #[serde(flatten)]
    pub store: StoreConfig,
}

/// RAG pipeline result
#[derive(Debug, Clone)]
pub struct RagResult {
    /// Original question
    pub question: String,
    /// Prompt to hand to the model
    pub prompt: String,
    /// Identifiers of the retrieved documents, most relevant first
    pub sources: Vec<String>,
    /// Number of documents loaded from the directory
    pub documents_loaded: usize,
}

/// End-to-end RAG pipeline over one documents directory
pub struct RagPipeline {
    documents_dir: PathBuf,
    store: DocumentStore,
    retriever: Retriever,
}

impl RagPipeline {
    /// Create new pipeline with default configuration
    pub fn new(documents_dir: impl Into<PathBuf>) -> Self {
        Self::with_config(documents_dir, RagConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(documents_dir: impl Into<PathBuf>, config: RagConfig) -> Self {
        Self {
            documents_dir: documents_dir.into(),
            store: DocumentStore::with_config(config.store),
            retriever: Retriever::with_params(config.search),
        }
    }

    /// Load the directory and build the prompt for `question`
    ///
    /// Each call takes a fresh snapshot of the directory.
    pub fn run(&self, question: &str) -> Result<RagResult> {
        let documents = self.store.load(&self.documents_dir)?;
        Ok(self.run_with_documents(question, &documents))
    }

    /// Build the prompt for `question` against already loaded documents
    pub fn run_with_documents(&self, question: &str, documents: &[Document]) -> RagResult {
        let retrieved = self.retriever.retrieve_default(question, documents);
        let prompt = build_prompt(question, &retrieved);

        RagResult {
            question: question.to_string(),
            prompt,
            sources: retrieved.iter().map(|d| d.identifier().to_string()).collect(),
            documents_loaded: documents.len(),
        }
    }
}

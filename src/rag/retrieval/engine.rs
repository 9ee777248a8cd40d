// Retrieval engine: rank documents against a question by token overlap
use serde::Deserialize;
use tracing::{debug, info};

use crate::rag::document::{Document, Query};
use crate::rag::similarity::jaccard;

/// Default number of documents handed to the prompt
pub const DEFAULT_TOP_K: usize = 3;

/// Search parameters for retrieval
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Maximum number of results to retrieve
    pub top_k: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Document paired with its relevance score
#[derive(Debug, Clone, Copy)]
pub struct ScoredDocument<'a> {
    pub document: &'a Document,
    pub score: f64,
}

/// Retrieval engine over an in-memory document collection
#[derive(Debug, Clone, Default)]
pub struct Retriever {
    default_params: SearchParams,
}

impl Retriever {
    /// Create new retriever with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom default parameters
    pub fn with_params(params: SearchParams) -> Self {
        Self {
            default_params: params,
        }
    }

    /// Score every document and return the relevant ones, best first
    ///
    /// Documents with zero overlap are dropped. Equal scores keep the order
    /// of `documents`; this is the only place where load order matters.
    pub fn rank<'a>(&self, query: &str, documents: &'a [Document]) -> Vec<ScoredDocument<'a>> {
        let query = Query::new(query);
        if query.is_empty() {
            debug!(query = query.text(), "Query has no word tokens, nothing can match");
            return Vec::new();
        }

        let mut scored: Vec<ScoredDocument<'a>> = documents
            .iter()
            .map(|document| ScoredDocument {
                document,
                score: jaccard(document.tokens(), query.tokens()),
            })
            .collect();

        // sort_by is stable, ties stay in input order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.retain(|s| s.score > 0.0);

        for s in &scored {
            debug!(document = s.document.identifier(), score = s.score, "Ranked document");
        }

        scored
    }

    /// Retrieve the `top_k` most relevant documents
    pub fn retrieve<'a>(&self, query: &str, documents: &'a [Document], top_k: usize) -> Vec<&'a Document> {
        let mut ranked = self.rank(query, documents);
        let relevant = ranked.len();
        ranked.truncate(top_k);

        info!(
            candidates = documents.len(),
            relevant,
            returned = ranked.len(),
            "Retrieval complete"
        );

        ranked.into_iter().map(|s| s.document).collect()
    }

    /// Retrieve using the default parameters
    pub fn retrieve_default<'a>(&self, query: &str, documents: &'a [Document]) -> Vec<&'a Document> {
        self.retrieve(query, documents, self.default_params.top_k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn docs(texts: &[&str]) -> Vec<Document> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Document::new(format!("doc{}.txt", i), *text))
            .collect()
    }

    fn ids(result: &[&Document]) -> Vec<String> {
        result.iter().map(|d| d.identifier().to_string()).collect()
    }

    #[test]
    fn test_search_params_default() {
        let params = SearchParams::default();
        assert_eq!(params.top_k, 3);
    }

    #[test]
    fn test_excludes_zero_overlap() {
        let corpus = docs(&["the cat sat on the mat", "dogs bark loudly"]);
        let result = Retriever::new().retrieve("cat mat", &corpus, 2);
        assert_eq!(ids(&result), vec!["doc0.txt"]);
    }

    #[test]
    fn test_orders_by_score() {
        let corpus = docs(&["rust", "rust tokio serde", "rust tokio"]);
        let result = Retriever::new().retrieve("rust tokio", &corpus, 3);
        // doc2 = 1.0, doc1 = 2/3, doc0 = 1/2
        assert_eq!(ids(&result), vec!["doc2.txt", "doc1.txt", "doc0.txt"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let corpus = docs(&["alpha beta", "gamma", "alpha beta"]);
        let result = Retriever::new().retrieve("alpha", &corpus, 5);
        assert_eq!(ids(&result), vec!["doc0.txt", "doc2.txt"]);
    }

    #[test]
    fn test_filter_applies_before_truncation() {
        let corpus = docs(&["nothing here", "nor here", "cat"]);
        let result = Retriever::new().retrieve("cat", &corpus, 1);
        assert_eq!(ids(&result), vec!["doc2.txt"]);
    }

    #[test]
    fn test_top_k_zero() {
        let corpus = docs(&["cat"]);
        assert!(Retriever::new().retrieve("cat", &corpus, 0).is_empty());
    }

    #[test]
    fn test_empty_collection() {
        assert!(Retriever::new().retrieve("cat", &[], 3).is_empty());
    }

    #[test]
    fn test_punctuation_query_matches_nothing() {
        let corpus = docs(&["cat", "mat"]);
        assert!(Retriever::new().retrieve("?!...", &corpus, 10).is_empty());
    }

    #[test]
    fn test_rank_keeps_scores() {
        let corpus = docs(&["cat mat", "cat"]);
        let ranked = Retriever::new().rank("cat", &corpus);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].document.identifier(), "doc1.txt");
        assert_eq!(ranked[0].score, 1.0);
        assert_eq!(ranked[1].score, 0.5);
    }

    #[test]
    fn test_retrieve_default_uses_params() {
        let corpus = docs(&["cat", "cat", "cat", "cat"]);
        let retriever = Retriever::with_params(SearchParams { top_k: 2 });
        assert_eq!(retriever.retrieve_default("cat", &corpus).len(), 2);
    }

    #[quickcheck]
    fn prop_never_more_than_k_nor_irrelevant(texts: Vec<String>, query: String, k: u8) -> bool {
        let corpus: Vec<Document> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Document::new(i.to_string(), t.as_str()))
            .collect();
        let query_tokens = Query::new(query.as_str());
        let result = Retriever::new().retrieve(&query, &corpus, k as usize);

        result.len() <= k as usize
            && result
                .iter()
                .all(|d| d.tokens().intersection(query_tokens.tokens()).next().is_some())
    }
}

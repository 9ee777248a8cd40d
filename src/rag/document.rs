// In-memory document and query records
use std::collections::HashSet;

use crate::rag::tokenizer::token_set;

/// A loaded text document
///
/// `tokens` is a cached projection of `text` computed once in [`Document::new`].
/// Fields are private so the two can never diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    identifier: String,
    text: String,
    tokens: HashSet<String>,
}

impl Document {
    /// Create a document, tokenizing its text
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = token_set(&text);
        Self {
            identifier: identifier.into(),
            text,
            tokens,
        }
    }

    /// Stable path or name of the document
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Raw document content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Normalized, deduplicated tokens of the content
    pub fn tokens(&self) -> &HashSet<String> {
        &self.tokens
    }
}

/// A question prepared for scoring
#[derive(Debug, Clone)]
pub struct Query {
    text: String,
    tokens: HashSet<String>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = token_set(&text);
        Self { text, tokens }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &HashSet<String> {
        &self.tokens
    }

    /// True when the query has no word tokens and so cannot match anything
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_tokens_follow_text() {
        let doc = Document::new("a.txt", "Rust is FAST, rust is safe");
        assert_eq!(doc.identifier(), "a.txt");
        assert_eq!(doc.text(), "Rust is FAST, rust is safe");
        assert_eq!(doc.tokens(), &token_set(doc.text()));
        assert_eq!(doc.tokens().len(), 4);
    }

    #[test]
    fn test_query_empty_when_punctuation_only() {
        let query = Query::new("?!");
        assert_eq!(query.text(), "?!");
        assert!(query.is_empty());
    }
}

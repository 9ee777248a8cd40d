// Prompt builder for retrieval-augmented questions
use crate::rag::document::Document;

/// Phrase the model is told to answer with when the context is insufficient
pub const UNKNOWN_ANSWER: &str = "I don't know";

/// Separator between document texts in the context section
pub const CONTEXT_SEPARATOR: &str = "\n\n";

/// Join document texts in the given order
pub fn build_context(documents: &[&Document]) -> String {
    documents
        .iter()
        .map(|doc| doc.text())
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}

/// Wrap retrieved context and the verbatim question in the answer template
///
/// The template is always complete: with no documents the `Context:` section
/// is present with an empty body. The prompt ends at `Answer:` so the model
/// continues from there.
pub fn build_prompt(question: &str, documents: &[&Document]) -> String {
    let context = build_context(documents);

    format!(
        "Answer the question using the context below. \
         If the context does not contain the answer, say '{}'.\n\n\
         Context:\n{}\n\nQuestion: {}\nAnswer:",
        UNKNOWN_ANSWER, context, question
    )
}

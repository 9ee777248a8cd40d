//! Word tokenizer
//!
//! Lower-cases text and splits it into maximal runs of word characters
//! (Unicode alphanumerics and `_`). Punctuation and whitespace only act as
//! separators. There is no stemming and no stop-word list, so the output is
//! fully deterministic.

use std::collections::HashSet;

/// Check whether a character belongs to a token
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into lower-case word tokens, in order of appearance
///
/// # Examples
///
/// ```
/// # use ragbuddy::rag::tokenizer::tokenize;
/// assert_eq!(tokenize("The cat, the MAT!"), vec!["the", "cat", "the", "mat"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    lowered
        .split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Deduplicated token set of a text
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

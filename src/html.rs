//! HTML to plain-text conversion
//!
//! Turns saved web pages into `.txt` files the document store can load.
//! Tags are dropped, not parsed: every `<...>` run becomes a space and
//! whitespace is collapsed. Good enough for keyword retrieval.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::{RagError, Result};
use crate::rag::store::list_directory;

const HTML_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Strip tags and normalize whitespace
///
/// A tag is `<` followed by at least one character and a closing `>`.
/// A lone `<` or `<>` is kept as text.
pub fn extract_text(html: &str) -> String {
    let mut stripped = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        stripped.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find('>') {
            Some(close) if close > 0 => {
                stripped.push(' ');
                rest = &after[close + 1..];
            }
            _ => {
                stripped.push('<');
                rest = after;
            }
        }
    }
    stripped.push_str(rest);

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| HTML_EXTENSIONS.iter().any(|h| h.eq_ignore_ascii_case(ext)))
}

/// Convert every HTML file in `html_dir` into `<stem>.txt` inside `txt_dir`
///
/// Returns the written paths in file-name order.
pub fn convert_directory(html_dir: impl AsRef<Path>, txt_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let html_dir = html_dir.as_ref();
    let txt_dir = txt_dir.as_ref();

    let sources = list_directory(html_dir, is_html)?;
    fs::create_dir_all(txt_dir)?;

    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let html = fs::read_to_string(&source).map_err(|e| RagError::DocumentRead {
            path: source.clone(),
            source: e,
        })?;

        let stem = source.file_stem().unwrap_or_default().to_string_lossy();
        let target = txt_dir.join(format!("{}.txt", stem));
        fs::write(&target, extract_text(&html))?;

        debug!(source = %source.display(), target = %target.display(), "Converted HTML");
        written.push(target);
    }

    info!(converted = written.len(), "HTML conversion complete");
    Ok(written)
}

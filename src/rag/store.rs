//! Document store
//!
//! Loads a flat directory of text files into [`Document`] records. File names
//! are sorted before reading so the resulting order, and with it the
//! retrieval tie-break, does not depend on filesystem enumeration order.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::errors::{RagError, Result};
use crate::rag::document::Document;

/// What to do when a single file cannot be read as UTF-8 text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Abort the whole load with [`RagError::DocumentRead`]
    #[default]
    FailFast,
    /// Skip the file and log a warning
    Skip,
}

/// Document store configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Recognized text extensions, compared case-insensitively
    pub extensions: Vec<String>,
    /// Per-file read failure policy
    pub decode_policy: DecodePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".to_string()],
            decode_policy: DecodePolicy::FailFast,
        }
    }
}

/// Loader for a directory of text documents
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    config: StoreConfig,
}

impl DocumentStore {
    /// Create store with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Load every recognized text file directly inside `directory`
    pub fn load(&self, directory: impl AsRef<Path>) -> Result<Vec<Document>> {
        let directory = directory.as_ref();
        let paths = list_directory(directory, |path| self.is_recognized(path))?;

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            match fs::read_to_string(&path) {
                Ok(text) => {
                    let document = Document::new(path.to_string_lossy(), text);
                    debug!(
                        document = document.identifier(),
                        tokens = document.tokens().len(),
                        "Loaded document"
                    );
                    documents.push(document);
                }
                Err(source) => match self.config.decode_policy {
                    DecodePolicy::FailFast => {
                        return Err(RagError::DocumentRead { path, source });
                    }
                    DecodePolicy::Skip => {
                        warn!(path = %path.display(), error = %source, "Skipping unreadable document");
                    }
                },
            }
        }

        info!(
            directory = %directory.display(),
            documents = documents.len(),
            "Document store loaded"
        );

        Ok(documents)
    }

    /// Check the extension against the configured list
    pub fn is_recognized(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.config
                    .extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}

/// Regular files directly inside `directory` accepted by `keep`, sorted by file name
///
/// A missing or unreadable directory, or an entry that cannot be read,
/// is reported as [`RagError::DocumentsDirectory`].
pub(crate) fn list_directory(directory: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
    let unusable = |reason: String| RagError::DocumentsDirectory {
        path: directory.to_path_buf(),
        reason,
    };

    if !directory.exists() {
        return Err(unusable("does not exist".to_string()));
    }
    if !directory.is_dir() {
        return Err(unusable("not a directory".to_string()));
    }

    let read_dir = fs::read_dir(directory).map_err(|e| unusable(e.to_string()))?;

    let mut paths = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| unusable(e.to_string()))?;
        let path = entry.path();
        if path.is_file() && keep(&path) {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

//! Configuration management for ragbuddy
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.ragbuddy/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{RagError, Result};
use crate::ollama::client::{DEFAULT_GENERATE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};
use crate::rag::pipeline::RagConfig;

/// Complete configuration for ragbuddy
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ollama: OllamaConfig,
    /// `[retrieval]` section, handed to the pipeline as is
    pub retrieval: RagConfig,
}

/// Ollama connection configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    /// Full generate endpoint
    pub url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_GENERATE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RagError::ConfigError(format!("Failed to read config {}: {}", path.display(), e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| RagError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".ragbuddy").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ollama.model.trim().is_empty() {
            return Err(RagError::ConfigError("model must not be empty".to_string()));
        }

        if !(self.ollama.url.starts_with("http://") || self.ollama.url.starts_with("https://")) {
            return Err(RagError::ConfigError(format!(
                "Ollama url must start with http:// or https://, got {}",
                self.ollama.url
            )));
        }

        if self.ollama.timeout_secs == 0 {
            return Err(RagError::ConfigError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.retrieval.store.extensions.is_empty() {
            return Err(RagError::ConfigError(
                "at least one document extension is required".to_string(),
            ));
        }

        Ok(())
    }

    /// Request timeout for the model call
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.ollama.timeout_secs)
    }
}

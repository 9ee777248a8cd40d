//! Ollama generate client
//!
//! Sends a finished prompt to `POST /api/generate` with streaming disabled
//! and returns the model's `response` text. The endpoint and model always
//! come from configuration.

use crate::errors::{RagError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Default Ollama generate endpoint
pub const DEFAULT_GENERATE_URL: &str = "http://127.0.0.1:11434/api/generate";

/// Default model
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Default request timeout (2 minutes, generation on CPU is slow)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Ollama generate request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

/// Ollama generate response body (non-streaming)
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
}

/// Non-streaming Ollama client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    url: String,
    model: String,
    timeout: Duration,
}

impl OllamaClient {
    /// Create client with custom configuration
    pub fn with_config(url: &str, model: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RagError::HttpError)?;

        Ok(Self {
            client,
            url: url.to_string(),
            model: model.to_string(),
            timeout,
        })
    }

    /// Request body for a prompt
    pub fn request_for(&self, prompt: &str) -> GenerateRequest {
        GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        }
    }

    /// Send the prompt and return the generated answer
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let body = serde_json::to_vec(&self.request_for(prompt))?;
        debug!(url = %self.url, model = %self.model, prompt_chars = prompt.len(), "Sending generate request");

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            return Err(RagError::OllamaApiError(format!(
                "HTTP {}: {}",
                status,
                String::from_utf8_lossy(&bytes)
            )));
        }

        let body: GenerateResponse = serde_json::from_slice(&bytes)?;

        info!(model = %self.model, answer_chars = body.response.len(), "Generation complete");
        Ok(body.response)
    }

    /// Timeouts anywhere in the exchange, headers or body, become `Timeout`
    fn map_transport_error(&self, err: reqwest::Error) -> RagError {
        if err.is_timeout() {
            RagError::Timeout {
                duration_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else {
            RagError::HttpError(err)
        }
    }

    /// Get generate endpoint
    pub fn url(&self) -> &str {
        &self.url
    }
}

//! Ollama Provider - `TextGenerator` implementation for a local Ollama host.
//!
//! Talks to Ollama's `/api/generate` endpoint with streaming disabled, so
//! a single JSON body carries the whole completion.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OllamaConfig::new()
//!     .with_model("llama3.2")
//!     .with_base_url("http://localhost:11434");
//!
//! let generator = OllamaGenerator::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::AiConfig;
use crate::ports::{
    GenerationError, GenerationRequest, GenerationResponse, ProviderInfo, TextGenerator,
};

/// Configuration for the Ollama generator.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Model to run (e.g. "llama3.2").
    pub model: String,
    /// Base URL of the Ollama host.
    pub base_url: String,
    /// Default sampling temperature.
    pub temperature: f32,
    /// Request timeout.
    pub timeout: Duration,
}

impl OllamaConfig {
    /// Creates a configuration with local-host defaults.
    pub fn new() -> Self {
        Self {
            model: "llama3.2".to_string(),
            base_url: "http://localhost:11434".to_string(),
            temperature: 0.5,
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the default temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&AiConfig> for OllamaConfig {
    fn from(config: &AiConfig) -> Self {
        Self {
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            temperature: config.temperature,
            timeout: config.timeout(),
        }
    }
}

/// Ollama implementation of the `TextGenerator` port.
pub struct OllamaGenerator {
    config: OllamaConfig,
    client: Client,
}

impl OllamaGenerator {
    /// Creates a generator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::InvalidRequest` if the HTTP client cannot
    /// be constructed.
    pub fn new(config: OllamaConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::InvalidRequest(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Builds the generate endpoint URL.
    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.base_url)
    }

    /// Converts a port request to Ollama's wire format.
    fn to_ollama_request(&self, request: &GenerationRequest) -> OllamaRequest {
        OllamaRequest {
            model: self.config.model.clone(),
            prompt: request.prompt.clone(),
            stream: false,
            options: OllamaOptions {
                temperature: request.temperature.unwrap_or(self.config.temperature),
            },
        }
    }
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        if request.prompt.trim().is_empty() {
            return Err(GenerationError::InvalidRequest("empty prompt".to_string()));
        }

        let body = self.to_ollama_request(&request);
        debug!(model = %body.model, prompt_bytes = request.prompt.len(), "calling ollama");

        let response = self
            .client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    GenerationError::unavailable(e.to_string())
                } else {
                    GenerationError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GenerationError::unavailable(format!(
                "ollama returned {}: {}",
                status, detail
            )));
        }

        let parsed: OllamaResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::parse(e.to_string()))?;

        Ok(GenerationResponse {
            content: parsed.response,
            model: parsed.model,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("ollama", self.config.model.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    #[serde(default)]
    model: String,
    #[serde(default)]
    response: String,
}

//! Text Generator Port - interface for the upstream language-model call.
//!
//! Abstracts the locally hosted model (Ollama) behind a provider-agnostic
//! trait so handlers and tests never couple to a specific runtime. The
//! model itself is an opaque capability: this crate sends a prompt and
//! receives a string approximating the requested markdown template.

use async_trait::async_trait;

/// Port for free-text generation against a language model.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a single non-streaming completion.
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError>;

    /// Returns provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for text generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// The full prompt to send.
    pub prompt: String,
    /// Temperature override (provider default when `None`).
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    /// Creates a request for the given prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
        }
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Response from text generation.
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    /// Generated text.
    pub content: String,
    /// Model that produced the response.
    pub model: String,
}

/// Provider information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    /// Provider name (e.g. "ollama", "mock").
    pub name: String,
    /// Model identifier (e.g. "llama3.2").
    pub model: String,
}

impl ProviderInfo {
    /// Creates provider info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Text generation errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Provider is unreachable or returned a server error.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Failed to parse the provider response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl GenerationError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if retrying the request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GenerationError::Unavailable { .. }
                | GenerationError::Network(_)
                | GenerationError::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_request_builder_works() {
        let request = GenerationRequest::new("hello").with_temperature(0.5);
        assert_eq!(request.prompt, "hello");
        assert_eq!(request.temperature, Some(0.5));
    }

    #[test]
    fn generation_error_retryable_classification() {
        assert!(GenerationError::unavailable("down").is_retryable());
        assert!(GenerationError::network("reset").is_retryable());
        assert!(GenerationError::Timeout { timeout_secs: 120 }.is_retryable());

        assert!(!GenerationError::parse("bad json").is_retryable());
        assert!(!GenerationError::InvalidRequest("empty prompt".into()).is_retryable());
    }

    #[test]
    fn generation_error_displays_details() {
        let err = GenerationError::Timeout { timeout_secs: 30 };
        assert_eq!(err.to_string(), "request timed out after 30s");
    }
}

//! Language-model configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the local Ollama model
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Model to run
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Ollama host
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Upper bound on model output accepted by the roadmap pipeline, in
    /// bytes. Oversized responses are truncated before parsing.
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("KRISHI__AI__MODEL"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }

        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        if self.max_response_bytes == 0 {
            return Err(ValidationError::InvalidResponseBound);
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
            max_response_bytes: default_max_response_bytes(),
        }
    }
}

fn default_model() -> String {
    "llama3.2".to_string()
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_temperature() -> f32 {
    0.5
}

fn default_timeout() -> u64 {
    120
}

fn default_max_response_bytes() -> usize {
    256 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(AiConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_base_url() {
        let config = AiConfig {
            base_url: "localhost:11434".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBaseUrl)
        ));
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let config = AiConfig {
            temperature: 3.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTemperature)
        ));
    }

    #[test]
    fn rejects_zero_response_bound() {
        let config = AiConfig {
            max_response_bytes: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidResponseBound)
        ));
    }

    #[test]
    fn timeout_converts_to_duration() {
        let config = AiConfig {
            timeout_secs: 30,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }
}

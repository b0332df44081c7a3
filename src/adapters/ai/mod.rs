//! AI adapters - implementations of the `TextGenerator` port.

mod mock_provider;
mod ollama_provider;

pub use mock_provider::MockTextGenerator;
pub use ollama_provider::{OllamaConfig, OllamaGenerator};

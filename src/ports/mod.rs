//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TextGenerator` - upstream language-model call (Ollama, mock)
//! - `RoadmapParser` - tolerant markdown-to-roadmap extraction

mod roadmap_parser;
mod text_generator;

pub use roadmap_parser::RoadmapParser;
pub use text_generator::{
    GenerationError, GenerationRequest, GenerationResponse, ProviderInfo, TextGenerator,
};

//! Application command handlers.

mod generate_roadmap;

pub use generate_roadmap::{FallbackFactory, GenerateRoadmapHandler};

//! Roadmap domain - document model and prompt template.

mod document;
mod prompt;

pub use document::{RoadmapDocument, YearEntry};
pub use prompt::roadmap_prompt;

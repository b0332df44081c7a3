//! Roadmap adapters - implementations of the `RoadmapParser` port.

mod markdown_parser;

pub use markdown_parser::{parse_roadmap, MarkdownRoadmapParser};

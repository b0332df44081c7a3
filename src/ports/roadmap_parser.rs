//! Roadmap Parser Port - tolerant extraction interface.
//!
//! The domain depends on this trait; adapters (like `MarkdownRoadmapParser`)
//! provide the implementation.

use crate::domain::roadmap::RoadmapDocument;

/// Port for extracting a structured roadmap from free-text model output.
///
/// # Contract
///
/// Implementations must:
/// - Always return a complete `RoadmapDocument`, never an error or panic
/// - Degrade to empty fields for any section they cannot locate
/// - Preserve the textual order of year entries (no re-sorting)
/// - Be pure: equal input yields field-for-field equal output
///
/// Callers observing an empty `years` sequence apply their own fallback
/// policy (retry, placeholder content); the parser never decides that.
pub trait RoadmapParser: Send + Sync {
    /// Extracts a best-effort roadmap from raw model output.
    ///
    /// `business_name` is used only to synthesize the document title; the
    /// title is deterministic regardless of whether the input echoes one.
    fn parse(&self, raw_text: &str, business_name: &str) -> RoadmapDocument;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roadmap_parser_is_object_safe() {
        fn check<T: RoadmapParser + ?Sized>() {}
        check::<dyn RoadmapParser>();
    }
}

//! GenerateRoadmapHandler - builds the prompt, calls the model, parses.
//!
//! The handler is the application-level seam between the upstream
//! text-generation port and the tolerant roadmap parser. It never fails:
//! generation errors produce the caller-supplied fallback document, and
//! parse degradation (empty `years`) is passed through for the caller's
//! own fallback policy.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::catalog::BusinessCatalog;
use crate::domain::profile::FarmerProfile;
use crate::domain::roadmap::{roadmap_prompt, RoadmapDocument};
use crate::ports::{GenerationRequest, RoadmapParser, TextGenerator};

/// Default bound on accepted model output, matching `AiConfig`.
const DEFAULT_MAX_RESPONSE_BYTES: usize = 256 * 1024;

/// Factory for the document returned when generation itself fails.
///
/// Fallback content is application policy: the parser never invents it,
/// so callers supply (or accept the default of) this hook explicitly.
pub type FallbackFactory = Arc<dyn Fn(&str) -> RoadmapDocument + Send + Sync>;

/// Handler for roadmap generation requests.
pub struct GenerateRoadmapHandler {
    generator: Arc<dyn TextGenerator>,
    parser: Arc<dyn RoadmapParser>,
    catalog: BusinessCatalog,
    max_response_bytes: usize,
    fallback: FallbackFactory,
}

impl GenerateRoadmapHandler {
    /// Creates a handler with the default fallback and response bound.
    pub fn new(generator: Arc<dyn TextGenerator>, parser: Arc<dyn RoadmapParser>) -> Self {
        Self {
            generator,
            parser,
            catalog: BusinessCatalog::new(),
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            fallback: Arc::new(|business| RoadmapDocument::unavailable(business)),
        }
    }

    /// Sets the upper bound on model output accepted for parsing.
    pub fn with_max_response_bytes(mut self, max_response_bytes: usize) -> Self {
        self.max_response_bytes = max_response_bytes;
        self
    }

    /// Sets the fallback document factory used on generation failure.
    pub fn with_fallback(mut self, fallback: FallbackFactory) -> Self {
        self.fallback = fallback;
        self
    }

    /// Generates a roadmap for the given profile and business query.
    ///
    /// Always returns a complete document. An empty `years` sequence means
    /// year extraction found nothing; the caller decides what the user
    /// sees in that case.
    pub async fn handle(&self, profile: &FarmerProfile, business_query: &str) -> RoadmapDocument {
        let business = self.catalog.resolve(business_query);
        let prompt = roadmap_prompt(profile, &business.title);

        info!(business = %business.title, farmer = %profile.name, "generating roadmap");

        match self.generator.generate(GenerationRequest::new(prompt)).await {
            Ok(response) => {
                let content = truncate_to_char_boundary(
                    response.content.trim(),
                    self.max_response_bytes,
                );
                if content.len() < response.content.trim().len() {
                    warn!(
                        business = %business.title,
                        bytes = response.content.len(),
                        bound = self.max_response_bytes,
                        "model response exceeded size bound; truncating before parse"
                    );
                }

                let doc = self.parser.parse(content, &business.title);
                if !doc.has_years() {
                    warn!(
                        business = %business.title,
                        "year extraction found no entries; possible template drift"
                    );
                }
                doc
            }
            Err(err) => {
                error!(
                    business = %business.title,
                    error = %err,
                    retryable = err.is_retryable(),
                    "roadmap generation failed; returning fallback document"
                );
                (self.fallback)(&business.title)
            }
        }
    }
}

/// Truncates to at most `max_bytes`, backing off to a char boundary.
fn truncate_to_char_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockTextGenerator;
    use crate::adapters::roadmap::MarkdownRoadmapParser;

    fn handler_with(generator: MockTextGenerator) -> GenerateRoadmapHandler {
        GenerateRoadmapHandler::new(
            Arc::new(generator),
            Arc::new(MarkdownRoadmapParser::new()),
        )
    }

    #[tokio::test]
    async fn successful_generation_is_parsed() {
        let generator = MockTextGenerator::new().with_response(
            "# Overview\nGood prospects.\n\n\
             # 1. 10-Year Growth & Profit Planner\n\
             ## Year 1: Establish\n\
             **Strategic Focus**: Quality stock\n\
             **Key Actions**:\n- Buy saplings\n\
             **Expected Profit**: ₹40000\n\
             # 2. Labor & Aging Analysis\nManageable alone.\n",
        );
        let handler = handler_with(generator);

        let doc = handler.handle(&FarmerProfile::guest(), "plant nursery").await;

        assert_eq!(
            doc.title,
            "10-Year Sustainability & Profit Planner for PLANT NURSERY"
        );
        assert_eq!(doc.overview, "Good prospects.");
        assert_eq!(doc.years.len(), 1);
        assert_eq!(doc.years[0].focus, "Quality stock");
    }

    #[tokio::test]
    async fn prompt_uses_resolved_business_title() {
        let generator = MockTextGenerator::new().with_response("whatever");
        let handler = GenerateRoadmapHandler::new(
            Arc::new(generator.clone()),
            Arc::new(MarkdownRoadmapParser::new()),
        );

        handler.handle(&FarmerProfile::guest(), "spirulina").await;

        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].prompt.contains("SPIRULINA FARMING (ALGAE)"));
    }

    #[tokio::test]
    async fn generation_failure_returns_default_fallback() {
        let generator = MockTextGenerator::new().with_unavailable("ollama down");
        let handler = handler_with(generator);

        let doc = handler.handle(&FarmerProfile::guest(), "plant nursery").await;

        assert_eq!(doc.title, "Roadmap for PLANT NURSERY (Error)");
        assert_eq!(doc.verdict, "Retry Later");
        assert!(doc.years.is_empty());
    }

    #[tokio::test]
    async fn caller_supplied_fallback_is_honored() {
        let generator = MockTextGenerator::new().with_timeout(120);
        let handler = handler_with(generator).with_fallback(Arc::new(|business| {
            let mut doc = RoadmapDocument::titled(business);
            doc.overview = "Showing last saved plan.".to_string();
            doc
        }));

        let doc = handler.handle(&FarmerProfile::guest(), "dairy").await;

        assert_eq!(doc.overview, "Showing last saved plan.");
    }

    #[tokio::test]
    async fn unparseable_output_degrades_to_empty_document() {
        let generator = MockTextGenerator::new().with_response("total nonsense");
        let handler = handler_with(generator);

        let doc = handler.handle(&FarmerProfile::guest(), "plant nursery").await;

        assert!(doc.years.is_empty());
        assert!(doc.overview.is_empty());
        // Still a structurally valid document, not an error.
        assert!(!doc.title.is_empty());
    }

    #[tokio::test]
    async fn oversized_response_is_truncated_before_parse() {
        let mut big = String::from("# Overview\nKept text.\n");
        big.push_str(&"x".repeat(64));
        let generator = MockTextGenerator::new().with_response(big);
        let handler = handler_with(generator).with_max_response_bytes(22);

        let doc = handler.handle(&FarmerProfile::guest(), "plant nursery").await;

        assert_eq!(doc.overview, "Kept text.");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // "₹" is three bytes; cutting inside it must back off.
        let text = "ab₹cd";
        assert_eq!(truncate_to_char_boundary(text, 3), "ab");
        assert_eq!(truncate_to_char_boundary(text, 5), "ab₹");
        assert_eq!(truncate_to_char_boundary(text, 100), "ab₹cd");
    }
}

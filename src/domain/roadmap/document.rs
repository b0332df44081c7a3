//! Value objects for generated business roadmaps.
//!
//! A `RoadmapDocument` is the structured result of parsing a multi-year
//! advisory text into discrete narrative and year-by-year fields. It is a
//! pure value: computed once per generation call and never mutated afterward.

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// RoadmapDocument - Parsed ten-year business roadmap
// ════════════════════════════════════════════════════════════════════════════════

/// Structured ten-year business roadmap extracted from model output.
///
/// Fields for sections the extractor could not find are empty strings or
/// empty sequences; an empty `years` sequence signals that year extraction
/// failed and the caller should apply its own fallback content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapDocument {
    /// Synthesized document title (always present).
    pub title: String,
    /// Long-term sustainability summary. Empty if the section was missing.
    pub overview: String,
    /// Year-by-year breakdown, in source-text order.
    pub years: Vec<YearEntry>,
    /// Labor and aging analysis narrative.
    pub labor_analysis: String,
    /// Succession and resource-health plan narrative.
    pub sustainability_plan: String,
    /// Bad-year financial resilience narrative.
    pub resilience_strategy: String,
    /// Feasibility verdict, with any disclaimer text split off.
    pub verdict: String,
    /// Disclaimer text, empty when the source carried no disclaimer marker.
    pub disclaimer: String,
}

impl RoadmapDocument {
    /// Creates an empty document with the title synthesized for a business.
    pub fn titled(business_name: &str) -> Self {
        Self {
            title: format!(
                "10-Year Sustainability & Profit Planner for {}",
                business_name
            ),
            ..Default::default()
        }
    }

    /// Safe placeholder document returned when generation itself fails.
    ///
    /// This is application-level fallback policy, deliberately kept out of
    /// the parser: callers hand it to the generation handler explicitly.
    pub fn unavailable(business_name: &str) -> Self {
        Self {
            title: format!("Roadmap for {} (Error)", business_name),
            overview: "Could not generate detailed roadmap due to high server load.".to_string(),
            verdict: "Retry Later".to_string(),
            ..Default::default()
        }
    }

    /// Returns true if year extraction found at least one entry.
    pub fn has_years(&self) -> bool {
        !self.years.is_empty()
    }

    /// Returns true if no narrative section and no year entry was extracted.
    pub fn is_empty(&self) -> bool {
        self.overview.is_empty()
            && self.years.is_empty()
            && self.labor_analysis.is_empty()
            && self.sustainability_plan.is_empty()
            && self.resilience_strategy.is_empty()
            && self.verdict.is_empty()
            && self.disclaimer.is_empty()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// YearEntry - One year of the growth planner
// ════════════════════════════════════════════════════════════════════════════════

/// One year's block within the growth planner section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearEntry {
    /// Heading label as written in the source, e.g. "Year 1".
    ///
    /// Serialized as `year` to match the renderer's wire contract.
    #[serde(rename = "year")]
    pub label: String,
    /// Free-text remainder of the year heading.
    pub goal: String,
    /// Primary objective for the year. Empty if not found.
    pub focus: String,
    /// Actionable steps, bullet markers stripped, in source order.
    pub actions: Vec<String>,
    /// Expected profit figure as written. Empty if not found.
    pub profit: String,
}

impl YearEntry {
    /// Creates an entry from a matched heading; detail fields start empty.
    pub fn new(label: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            goal: goal.into(),
            ..Default::default()
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

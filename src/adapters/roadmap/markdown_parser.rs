//! Markdown roadmap parser adapter.
//!
//! Extracts a structured `RoadmapDocument` from the loosely templated
//! markdown a language model returns for the ten-year planner prompt.
//! The extractor is tolerant, not a validator: it never fails, degrading
//! to empty fields wherever the text drifts from the template.
//!
//! Boundary rules are implemented as single-pass line scans plus
//! precompiled line-level regexes, so cost stays linear in input length.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::roadmap::{RoadmapDocument, YearEntry};
use crate::ports::RoadmapParser;

/// The six fixed top-level section names, matched case-insensitively after
/// a line-start `# ` marker. Each narrative span ends at its known
/// successor heading (or end of document).
const SECTION_OVERVIEW: &str = "Overview";
const SECTION_PLANNER: &str = "1. 10-Year Growth & Profit Planner";
const SECTION_LABOR: &str = "2. Labor & Aging Analysis";
const SECTION_SUSTAINABILITY: &str = "3. Sustainability & Succession";
const SECTION_RESILIENCE: &str = "4. Financial Resilience";
const SECTION_VERDICT: &str = "5. Final Verdict";

/// Case-sensitive marker separating the verdict from its disclaimer.
const DISCLAIMER_MARKER: &str = "DISCLAIMER:";

/// Line prefix that terminates a year body even without a next year
/// heading: the start of the next major section.
const PLANNER_END_PREFIX: &str = "# 2.";

/// Regex-based implementation of `RoadmapParser`.
///
/// Designed as the inverse of the roadmap prompt template: everything the
/// prompt asks the model to emit, this adapter knows how to take apart.
#[derive(Debug, Clone)]
pub struct MarkdownRoadmapParser {
    year_heading_regex: Regex,
    focus_regex: Regex,
    profit_regex: Regex,
    actions_label_regex: Regex,
    profit_label_regex: Regex,
    bullet_regex: Regex,
}

impl Default for MarkdownRoadmapParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRoadmapParser {
    /// Creates a new parser with precompiled regexes.
    pub fn new() -> Self {
        Self {
            // Matches "## Year 1: Establish the unit" (case-insensitive on
            // "Year", any digit count), capturing label and goal.
            year_heading_regex: Regex::new(r"(?i)^##\s+(year\s+\d+):\s*(.*)$").unwrap(),
            // Matches "**Strategic Focus**: value" up to end of line.
            focus_regex: Regex::new(r"(?i)\*\*strategic focus\*\*:\s*(.*)").unwrap(),
            // Matches "**Expected Profit**: value" up to end of line.
            profit_regex: Regex::new(r"(?i)\*\*expected profit\*\*:\s*(.*)").unwrap(),
            // Start of the key-actions block.
            actions_label_regex: Regex::new(r"(?i)\*\*key actions\*\*:").unwrap(),
            // End of the key-actions block.
            profit_label_regex: Regex::new(r"(?i)\*\*expected profit\*\*").unwrap(),
            // Leading bullet marker, with or without following whitespace.
            bullet_regex: Regex::new(r"^[-*]\s*").unwrap(),
        }
    }

    /// Returns true if `line` is the top-level heading for `name`.
    ///
    /// Anchored to line start: exactly `# ` followed by the section name,
    /// compared case-insensitively with surrounding whitespace ignored.
    fn is_section_heading(line: &str, name: &str) -> bool {
        match line.strip_prefix("# ") {
            Some(rest) => rest.trim().eq_ignore_ascii_case(name),
            None => false,
        }
    }

    /// Extracts the trimmed span between a section heading and its
    /// successor heading (earliest boundary wins), or end of document.
    ///
    /// A missing heading yields the empty string; nearby content is never
    /// guessed at.
    fn section_span(lines: &[&str], name: &str, successor: Option<&str>) -> String {
        let Some(start) = lines.iter().position(|l| Self::is_section_heading(l, name)) else {
            return String::new();
        };

        let mut end = lines.len();
        if let Some(successor) = successor {
            if let Some(offset) = lines[start + 1..]
                .iter()
                .position(|l| Self::is_section_heading(l, successor))
            {
                end = start + 1 + offset;
            }
        }

        lines[start + 1..end].join("\n").trim().to_string()
    }

    /// Scans the entire input for `## Year N:` sub-headings and extracts
    /// one entry per heading, in textual order.
    ///
    /// Runs independently of the section pass: a year block is honored
    /// wherever it appears. Headings whose goal fragment is empty are
    /// skipped entirely rather than emitted as partial entries.
    fn extract_years(&self, lines: &[&str]) -> Vec<YearEntry> {
        let mut headings: Vec<(usize, String, String)> = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            if let Some(caps) = self.year_heading_regex.captures(line.trim_end()) {
                let label = caps[1].to_string();
                let goal = caps[2].trim().to_string();
                headings.push((index, label, goal));
            }
        }

        let mut years = Vec::with_capacity(headings.len());
        for (position, (heading_index, label, goal)) in headings.iter().enumerate() {
            if goal.is_empty() {
                continue;
            }

            // Body runs to the next year heading, the next major section
            // ("# 2."), or end of document - whichever comes first.
            let mut end = headings
                .get(position + 1)
                .map(|next| next.0)
                .unwrap_or(lines.len());
            if let Some(offset) = lines[heading_index + 1..end]
                .iter()
                .position(|l| l.starts_with(PLANNER_END_PREFIX))
            {
                end = heading_index + 1 + offset;
            }

            let body = lines[heading_index + 1..end].join("\n");
            years.push(self.parse_year_body(label, goal, &body));
        }

        years
    }

    /// Extracts the labeled detail fields from one year's body text.
    fn parse_year_body(&self, label: &str, goal: &str, body: &str) -> YearEntry {
        let focus = self
            .focus_regex
            .captures(body)
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_default();

        let profit = self
            .profit_regex
            .captures(body)
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_default();

        YearEntry {
            label: label.to_string(),
            goal: goal.to_string(),
            focus,
            actions: self.extract_actions(body),
            profit,
        }
    }

    /// Extracts the action list between the `**Key Actions**:` label and
    /// the `**Expected Profit**` label (or end of body).
    ///
    /// Each non-blank line has one leading `-` or `*` bullet stripped and
    /// is appended in original order.
    fn extract_actions(&self, body: &str) -> Vec<String> {
        let Some(label) = self.actions_label_regex.find(body) else {
            return Vec::new();
        };

        let rest = &body[label.end()..];
        let block = match self.profit_label_regex.find(rest) {
            Some(end) => &rest[..end.start()],
            None => rest,
        };

        block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| self.bullet_regex.replace(line, "").trim().to_string())
            .collect()
    }
}

impl RoadmapParser for MarkdownRoadmapParser {
    fn parse(&self, raw_text: &str, business_name: &str) -> RoadmapDocument {
        let mut doc = RoadmapDocument::titled(business_name);
        let lines: Vec<&str> = raw_text.lines().collect();

        doc.overview = Self::section_span(&lines, SECTION_OVERVIEW, Some(SECTION_PLANNER));
        doc.labor_analysis = Self::section_span(&lines, SECTION_LABOR, Some(SECTION_SUSTAINABILITY));
        doc.sustainability_plan =
            Self::section_span(&lines, SECTION_SUSTAINABILITY, Some(SECTION_RESILIENCE));
        doc.resilience_strategy =
            Self::section_span(&lines, SECTION_RESILIENCE, Some(SECTION_VERDICT));

        // The verdict runs to end of document; an embedded disclaimer is
        // split off so the frontend can render it separately.
        let verdict_span = Self::section_span(&lines, SECTION_VERDICT, None);
        match verdict_span.split_once(DISCLAIMER_MARKER) {
            Some((verdict, disclaimer)) => {
                doc.verdict = verdict.trim().to_string();
                doc.disclaimer = disclaimer.trim().to_string();
            }
            None => doc.verdict = verdict_span,
        }

        doc.years = self.extract_years(&lines);
        doc
    }
}

static DEFAULT_PARSER: Lazy<MarkdownRoadmapParser> = Lazy::new(MarkdownRoadmapParser::new);

/// Parses raw model output with the shared default parser.
///
/// Pure function of `(raw_text, business_name)`: no state is retained
/// between calls, and every input - however malformed - produces a
/// structurally valid document.
pub fn parse_roadmap(raw_text: &str, business_name: &str) -> RoadmapDocument {
    DEFAULT_PARSER.parse(raw_text, business_name)
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

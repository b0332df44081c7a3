//! Property tests for the tolerant roadmap parser.
//!
//! The parser's contract is total: any input, however malformed, must
//! produce a structurally valid document, and equal input must produce
//! equal output. These properties are exercised over generated text
//! rather than hand-picked samples.

use proptest::prelude::*;

use krishi_roadmap::parse_roadmap;

proptest! {
    /// Arbitrary input never fails and always carries the synthesized title.
    #[test]
    fn parser_is_total(raw in any::<String>(), business in "[A-Za-z ()]{0,24}") {
        let doc = parse_roadmap(&raw, &business);
        prop_assert_eq!(
            doc.title,
            format!("10-Year Sustainability & Profit Planner for {}", business)
        );
    }

    /// Parsing is a pure function: same input, field-for-field same output.
    #[test]
    fn parser_is_idempotent(raw in any::<String>()) {
        let first = parse_roadmap(&raw, "X");
        let second = parse_roadmap(&raw, "X");
        prop_assert_eq!(first, second);
    }

    /// Every extracted year entry has a non-empty label and goal.
    #[test]
    fn year_entries_are_never_partial(raw in any::<String>()) {
        let doc = parse_roadmap(&raw, "X");
        for entry in &doc.years {
            prop_assert!(!entry.label.is_empty());
            prop_assert!(!entry.goal.trim().is_empty());
        }
    }

    /// Year entries keep textual order, including duplicates and
    /// out-of-numeric-order headings. No re-sorting, no de-duplication.
    #[test]
    fn year_order_is_textual(
        headings in prop::collection::vec(
            (1u32..=99, "[A-Za-z][A-Za-z ]{0,16}"),
            1..8,
        )
    ) {
        let mut text = String::new();
        for (number, goal) in &headings {
            text.push_str(&format!("## Year {}: {}\nsome body text\n", number, goal));
        }

        let doc = parse_roadmap(&text, "X");

        prop_assert_eq!(doc.years.len(), headings.len());
        for (entry, (number, goal)) in doc.years.iter().zip(&headings) {
            prop_assert_eq!(&entry.label, &format!("Year {}", number));
            prop_assert_eq!(&entry.goal, goal.trim());
        }
    }

    /// Splitting on the disclaimer marker loses no text.
    #[test]
    fn disclaimer_split_is_lossless(
        verdict in "[a-z ]{0,40}",
        disclaimer in "[A-Za-z .]{0,40}",
    ) {
        let text = format!(
            "# 5. Final Verdict\n{}\nDISCLAIMER:{}\n",
            verdict, disclaimer
        );

        let doc = parse_roadmap(&text, "X");

        prop_assert_eq!(doc.verdict, verdict.trim());
        prop_assert_eq!(doc.disclaimer, disclaimer.trim());
    }
}

//! Fixed catalog of supported farm business options.
//!
//! The advisory flow only recommends businesses from this strict list;
//! lookups resolve free-form frontend input (an id or a title fragment) to
//! the canonical option.

use serde::{Deserialize, Serialize};

/// One business option from the strict advisory list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessOption {
    /// Stable catalog id ("1".."15", or "unknown" for unresolved input).
    pub id: String,
    /// Canonical display title.
    pub title: String,
}

/// The strict list of businesses the advisor recommends from.
pub const BUSINESS_OPTIONS: [(&str, &str); 15] = [
    ("1", "FLOWER PLANTATION (GERBERA)"),
    ("2", "PACKAGED DRINKING WATER BUSINESS"),
    ("3", "AMUL FRANCHISE BUSINESS"),
    ("4", "SPIRULINA FARMING (ALGAE)"),
    ("5", "DAIRY FARMING (6–8 COW UNIT)"),
    ("6", "GOAT MILK FARMING (20–25 MILCH GOATS UNIT)"),
    ("7", "MUSHROOM FARMING (OYSTER)"),
    ("8", "POULTRY FARMING (BROILER)"),
    ("9", "VERMICOMPOST PRODUCTION"),
    ("10", "PLANT NURSERY"),
    ("11", "COW DUNG ORGANIC MANURE & BIO-INPUTS"),
    ("12", "COW DUNG PRODUCTS (DHOOP, DIYAS)"),
    ("13", "LEAF PLATE (DONA–PATTAL) MANUFACTURING"),
    ("14", "AGRI-INPUT TRADING"),
    ("15", "INLAND FISH FARMING (POND-BASED)"),
];

/// Lookup over the fixed business option list.
#[derive(Debug, Clone, Copy, Default)]
pub struct BusinessCatalog;

impl BusinessCatalog {
    /// Creates a catalog over the fixed option list.
    pub fn new() -> Self {
        Self
    }

    /// Resolves frontend input (id or title, exact or partial) to an option.
    ///
    /// Exact id/title matches win over partial title matches. Unresolvable
    /// input is echoed back with id "unknown" rather than rejected, so a
    /// typo never blocks roadmap generation.
    pub fn resolve(&self, query: &str) -> BusinessOption {
        let search = query.trim().to_lowercase();

        for (id, title) in BUSINESS_OPTIONS {
            if *id == search || title.to_lowercase() == search {
                return BusinessOption {
                    id: id.to_string(),
                    title: title.to_string(),
                };
            }
        }

        for (id, title) in BUSINESS_OPTIONS {
            if title.to_lowercase().contains(&search) {
                return BusinessOption {
                    id: id.to_string(),
                    title: title.to_string(),
                };
            }
        }

        BusinessOption {
            id: "unknown".to_string(),
            title: query.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_by_id() {
        let option = BusinessCatalog::new().resolve("7");
        assert_eq!(option.title, "MUSHROOM FARMING (OYSTER)");
    }

    #[test]
    fn resolves_by_exact_title_case_insensitive() {
        let option = BusinessCatalog::new().resolve("plant nursery");
        assert_eq!(option.id, "10");
    }

    #[test]
    fn resolves_by_partial_title() {
        let option = BusinessCatalog::new().resolve("spirulina");
        assert_eq!(option.id, "4");
        assert_eq!(option.title, "SPIRULINA FARMING (ALGAE)");
    }

    #[test]
    fn unresolvable_input_is_echoed_with_unknown_id() {
        let option = BusinessCatalog::new().resolve("llama wool export");
        assert_eq!(option.id, "unknown");
        assert_eq!(option.title, "llama wool export");
    }

    #[test]
    fn exact_match_wins_over_partial() {
        // "dairy" appears in the id-5 title; an exact id match must not be
        // shadowed by the partial scan.
        let option = BusinessCatalog::new().resolve("5");
        assert_eq!(option.title, "DAIRY FARMING (6–8 COW UNIT)");
    }
}

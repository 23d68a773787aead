//! Allergen detection
//!
//! Whole-word matching of a fixed allergen vocabulary against the full
//! normalized text and against each extracted ingredient token. Substring
//! hits (e.g., "soy" inside "soybean oil" is a word, "milk" inside
//! "buttermilked" is not) are rejected by the word boundaries.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::AllergenInfo;

/// Canonical allergen terms and synonyms checked on every extraction
pub const ALLERGEN_VOCABULARY: &[&str] = &[
    "milk",
    "dairy",
    "whey",
    "casein",
    "lactose",
    "egg",
    "eggs",
    "peanut",
    "peanuts",
    "tree nut",
    "tree nuts",
    "almond",
    "almonds",
    "hazelnut",
    "hazelnuts",
    "walnut",
    "walnuts",
    "pecan",
    "pecans",
    "cashew",
    "cashews",
    "soy",
    "soya",
    "soybean",
    "soybeans",
    "wheat",
    "gluten",
    "fish",
    "shellfish",
    "crab",
    "lobster",
    "shrimp",
    "prawn",
    "sesame",
    "sesame seeds",
    "mustard",
    "celery",
    "lupine",
    "mollusc",
    "mollusk",
    "molluscs",
    "mollusks",
];

static ALLERGEN_MATCHERS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    ALLERGEN_VOCABULARY
        .iter()
        .map(|term| {
            let regex = Regex::new(&format!(r"\b{}\b", regex::escape(term)))
                .expect("invalid allergen term");
            (*term, regex)
        })
        .collect()
});

/// Run the allergen vocabulary against text and ingredient tokens
///
/// Returns one entry per vocabulary term, found or not.
pub fn detect_allergens(normalized: &str, ingredients: &[String]) -> Vec<AllergenInfo> {
    ALLERGEN_MATCHERS
        .iter()
        .map(|(term, regex)| {
            let found = regex.is_match(normalized)
                || ingredients.iter().any(|token| regex.is_match(token));
            AllergenInfo {
                name: term.to_string(),
                found,
            }
        })
        .collect()
}

//! Ingredient list extraction
//!
//! Tries an ordered cascade of label-introducer patterns; when none
//! matches, falls back to a whole-text vocabulary scan. The fallback is
//! best-effort and may both over- and under-detect.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Minimum trimmed length for an introducer match to count as a section
const MIN_SECTION_LEN: usize = 3;

/// Minimum length for a split token to survive filtering
const MIN_TOKEN_LEN: usize = 2;

/// Ordered introducer patterns, most explicit first. Each captures
/// non-greedily up to the first section boundary: a period, the start of a
/// nutrition-facts or allergen-statement section, a net-weight line, or the
/// end of the text.
static INTRODUCER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"ingredients", r"contains", r"made with"]
        .iter()
        .map(|introducer| {
            Regex::new(&format!(
                r"{introducer}\s*:?\s*(.+?)(?:\.|nutrition|allergen|net weight|$)"
            ))
            .expect("invalid introducer pattern")
        })
        .collect()
});

/// Common food-ingredient terms for the fallback whole-text scan
pub const INGREDIENT_VOCABULARY: &[&str] = &[
    "sugar",
    "salt",
    "water",
    "milk",
    "cream",
    "butter",
    "egg",
    "wheat flour",
    "flour",
    "corn syrup",
    "corn",
    "rice",
    "oats",
    "barley",
    "malt",
    "soy",
    "honey",
    "molasses",
    "yeast",
    "cocoa",
    "chocolate",
    "vanilla",
    "cinnamon",
    "peanut",
    "almond",
    "palm oil",
    "sunflower oil",
    "vegetable oil",
    "whey",
    "gelatin",
    "starch",
    "lecithin",
];

static VOCABULARY_MATCHERS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    INGREDIENT_VOCABULARY
        .iter()
        .map(|term| {
            let regex = Regex::new(&format!(r"\b{}\b", regex::escape(term)))
                .expect("invalid vocabulary term");
            (*term, regex)
        })
        .collect()
});

/// Extract the ingredient list from normalized label text
///
/// Tokens come back trimmed, lowercase (input is already lowercased), and
/// deduplicated preserving first occurrence.
pub fn extract_ingredients(normalized: &str) -> Vec<String> {
    for pattern in INTRODUCER_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(normalized) {
            let section = caps[1].trim();
            if section.len() >= MIN_SECTION_LEN {
                let tokens = split_section(section);
                if !tokens.is_empty() {
                    return tokens;
                }
            }
        }
    }

    // No introducer found: whole-text vocabulary scan
    let hits = vocabulary_scan(normalized);
    if !hits.is_empty() {
        tracing::debug!(
            "No ingredient section found, vocabulary scan matched {} terms",
            hits.len()
        );
    }
    hits
}

/// Split a matched ingredient section into clean tokens
fn split_section(section: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();

    for raw in section.split([',', ';', '(', ')']) {
        let token = raw.trim();
        if token.len() < MIN_TOKEN_LEN || is_numeric_token(token) {
            continue;
        }
        if seen.insert(token.to_string()) {
            tokens.push(token.to_string());
        }
    }

    tokens
}

/// True for tokens that carry no ingredient information (amounts, percentages)
fn is_numeric_token(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '%' | ' '))
}

/// Whole-word scan of the full text against the ingredient vocabulary
fn vocabulary_scan(normalized: &str) -> Vec<String> {
    VOCABULARY_MATCHERS
        .iter()
        .filter(|(_, regex)| regex.is_match(normalized))
        .map(|(term, _)| term.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredients_introducer() {
        let tokens = extract_ingredients("ingredients: sugar, corn syrup, wheat flour. sodium 150mg");
        assert_eq!(tokens, vec!["sugar", "corn syrup", "wheat flour"]);
    }

    #[test]
    fn test_contains_introducer() {
        let tokens = extract_ingredients("contains: milk; cocoa butter; vanilla extract");
        assert_eq!(tokens, vec!["milk", "cocoa butter", "vanilla extract"]);
    }

    #[test]
    fn test_made_with_introducer() {
        let tokens = extract_ingredients("made with whole oats, honey");
        assert_eq!(tokens, vec!["whole oats", "honey"]);
    }

    #[test]
    fn test_section_stops_at_nutrition_boundary() {
        let tokens = extract_ingredients("ingredients: rice, salt nutrition facts sodium 300mg");
        assert_eq!(tokens, vec!["rice", "salt"]);
    }

    #[test]
    fn test_parenthetical_and_numeric_tokens_dropped() {
        let tokens = extract_ingredients("ingredients: sugar (40%), cocoa (12), e");
        assert_eq!(tokens, vec!["sugar", "cocoa"]);
    }

    #[test]
    fn test_deduplicates_preserving_order() {
        let tokens = extract_ingredients("ingredients: sugar, cocoa, sugar");
        assert_eq!(tokens, vec!["sugar", "cocoa"]);
    }

    #[test]
    fn test_fallback_vocabulary_scan() {
        let tokens = extract_ingredients("delicious snack with milk chocolate and honey");
        assert!(tokens.contains(&"milk".to_string()));
        assert!(tokens.contains(&"chocolate".to_string()));
        assert!(tokens.contains(&"honey".to_string()));
    }

    #[test]
    fn test_fallback_requires_whole_words() {
        // "rice" embedded in "price" must not register
        let tokens = extract_ingredients("best price guaranteed");
        assert!(!tokens.contains(&"rice".to_string()));
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        assert!(extract_ingredients("").is_empty());
        assert!(extract_ingredients("lorem ipsum dolor").is_empty());
    }
}

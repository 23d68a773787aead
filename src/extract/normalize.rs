//! Label text normalization
//!
//! First pass over raw OCR output. Periods, colons, and commas survive
//! normalization: the section-boundary heuristic and the nutrient patterns
//! depend on them.

/// Symbols stripped outright (OCR artifacts and label decorations)
const STRIPPED_SYMBOLS: &[char] = &['*', '•', '®', '™', '†', '‡', '"', '\'', '_'];

/// Separator punctuation softened to a plain space
const SOFTENED_SEPARATORS: &[char] = &['|', '/', '\\', '\t', '\r', '\n'];

/// Normalize raw label text: lowercase, strip symbols, soften separators,
/// collapse whitespace runs.
pub fn normalize(text: &str) -> String {
    let mut softened = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if STRIPPED_SYMBOLS.contains(&c) {
            continue;
        }
        if SOFTENED_SEPARATORS.contains(&c) {
            softened.push(' ');
        } else {
            softened.push(c);
        }
    }

    let mut collapsed = String::with_capacity(softened.len());
    let mut previous_was_space = false;
    for c in softened.chars() {
        if c.is_whitespace() {
            if !previous_was_space {
                collapsed.push(' ');
            }
            previous_was_space = true;
        } else {
            collapsed.push(c);
            previous_was_space = false;
        }
    }

    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_collapses_whitespace() {
        assert_eq!(
            normalize("Sugars   12g\n\nSodium\t150mg"),
            "sugars 12g sodium 150mg"
        );
    }

    #[test]
    fn test_strips_decoration_symbols() {
        assert_eq!(normalize("Brand™ Cereal* •Honey•"), "brand cereal honey");
    }

    #[test]
    fn test_softens_separators_keeps_sentence_punctuation() {
        assert_eq!(
            normalize("Ingredients: milk|sugar/cocoa."),
            "ingredients: milk sugar cocoa."
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }
}

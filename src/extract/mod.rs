//! Field Extractor
//!
//! Turns noisy, OCR-derived label text into a structured [`NutritionData`]
//! record. The extractor never fails: malformed or empty input yields a
//! sparsely populated record, not an error.

mod allergens;
mod ingredients;
mod normalize;
mod nutrients;

pub use allergens::ALLERGEN_VOCABULARY;
pub use ingredients::INGREDIENT_VOCABULARY;

use crate::models::NutritionData;

/// Extract structured nutrition facts from raw label text
///
/// Pure function of the input string: identical text always yields a
/// structurally identical result.
pub fn extract_nutrition(text: &str) -> NutritionData {
    let normalized = normalize::normalize(text);

    let mut data = NutritionData {
        ingredients: ingredients::extract_ingredients(&normalized),
        ..Default::default()
    };

    nutrients::apply(&normalized, &mut data);
    data.allergens = allergens::detect_allergens(&normalized, &data.ingredients);

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;

    #[test]
    fn test_full_label_extraction() {
        let text = "Ingredients: sugar, corn syrup, wheat flour. \
                    Total Carbohydrates 35g. Sugars 12g. Sodium 150mg.";
        let data = extract_nutrition(text);

        assert_eq!(data.ingredients, vec!["sugar", "corn syrup", "wheat flour"]);

        let carbs = data.total_carbohydrates.as_ref().unwrap();
        assert_eq!(carbs.amount, 35.0);
        assert_eq!(carbs.unit, Unit::G);

        let sugars = data.sugars.as_ref().unwrap();
        assert_eq!(sugars.amount, 12.0);
        assert_eq!(sugars.unit, Unit::G);

        let sodium = data.sodium.as_ref().unwrap();
        assert_eq!(sodium.amount, 150.0);
        assert_eq!(sodium.unit, Unit::Mg);

        // wheat is a vocabulary allergen and must register as found
        assert!(data
            .allergens
            .iter()
            .any(|a| a.name == "wheat" && a.found));
    }

    #[test]
    fn test_empty_input_is_valid_low_information_result() {
        let data = extract_nutrition("");
        assert!(data.ingredients.is_empty());
        assert!(data.allergens.iter().all(|a| !a.found));
        assert!(data.is_empty());
        // One entry per vocabulary term even on empty input
        assert_eq!(data.allergens.len(), ALLERGEN_VOCABULARY.len());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "INGREDIENTS: oats, honey | Sodium: 90 mg\nCalories 210";
        let first = extract_nutrition(text);
        let second = extract_nutrition(text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_garbage_input_does_not_panic() {
        let data = extract_nutrition("@@@@ ???? 12345 ////");
        assert!(data.ingredients.is_empty());
    }
}

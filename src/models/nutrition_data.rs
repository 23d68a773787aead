//! Extracted nutrition data model
//!
//! The immutable record produced once per submitted label text. Absent
//! optional fields mean "not found on the label", never an error.

use serde::{Deserialize, Serialize};

use super::NutrientInfo;

/// One vocabulary allergen and whether it was detected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergenInfo {
    /// Canonical vocabulary term (e.g., "peanut", "wheat")
    pub name: String,
    /// True when the term matched the label text or an ingredient token
    pub found: bool,
}

/// Structured nutrition facts extracted from one label text
///
/// There is one entry in `allergens` per vocabulary term, found or not.
/// `ingredients` holds deduplicated, trimmed, lowercase tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<NutrientInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_fat: Option<NutrientInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturated_fat: Option<NutrientInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cholesterol: Option<NutrientInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium: Option<NutrientInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_carbohydrates: Option<NutrientInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_fiber: Option<NutrientInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugars: Option<NutrientInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<NutrientInfo>,
    pub allergens: Vec<AllergenInfo>,
    pub ingredients: Vec<String>,
}

impl NutritionData {
    /// Allergens that were actually detected
    pub fn found_allergens(&self) -> impl Iterator<Item = &AllergenInfo> {
        self.allergens.iter().filter(|a| a.found)
    }

    /// True when nothing at all was extracted
    pub fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.total_fat.is_none()
            && self.saturated_fat.is_none()
            && self.cholesterol.is_none()
            && self.sodium.is_none()
            && self.total_carbohydrates.is_none()
            && self.dietary_fiber.is_none()
            && self.sugars.is_none()
            && self.protein.is_none()
            && self.ingredients.is_empty()
            && !self.allergens.iter().any(|a| a.found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;

    #[test]
    fn test_default_is_empty() {
        let data = NutritionData::default();
        assert!(data.is_empty());
        assert!(data.found_allergens().next().is_none());
    }

    #[test]
    fn test_not_empty_with_nutrient() {
        let data = NutritionData {
            sodium: Some(NutrientInfo::new("Sodium", 150.0, Unit::Mg)),
            ..Default::default()
        };
        assert!(!data.is_empty());
    }
}

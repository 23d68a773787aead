//! Food allergy evaluator
//!
//! Driven by the extractor's allergen vocabulary results rather than a
//! threshold table: any detected allergen forces avoid. Cross-contamination
//! phrasing only ever raises safe to caution.

use crate::models::{Condition, HealthAnalysis, HealthEffect, NutritionData, Recommendation};

const NO_CONCERNS: &str = "No common allergens detected.";

/// Phrases indicating cross-contamination risk rather than a listed allergen
const CROSS_CONTAMINATION_PHRASES: &[&str] = &[
    "may contain",
    "produced in a facility",
    "processed in a facility",
];

/// Evaluate nutrition data for people with food allergies
pub fn analyze_for_allergies(data: &NutritionData) -> HealthAnalysis {
    let mut recommendation = Recommendation::Safe;
    let mut reasoning = NO_CONCERNS.to_string();
    let mut effects = Vec::new();

    // Any detected vocabulary allergen forces avoid
    let allergen_names = dedupe_variants(data.found_allergens().map(|a| a.name.as_str()));
    if !allergen_names.is_empty() {
        recommendation = recommendation.escalate(Recommendation::Avoid);
        reasoning = format!("Contains common allergens: {}.", allergen_names.join(", "));

        for name in &allergen_names {
            effects.push(HealthEffect::new(
                name.to_string(),
                format!(
                    "Can trigger allergic reactions ranging from mild symptoms to severe \
                     anaphylaxis in people with {name} allergies"
                ),
            ));
        }
    }

    // Cross-contamination statements in the ingredient text
    let has_trace_warning = data.ingredients.iter().any(|ingredient| {
        CROSS_CONTAMINATION_PHRASES
            .iter()
            .any(|phrase| ingredient.contains(phrase))
    });

    if has_trace_warning {
        recommendation = recommendation.escalate(Recommendation::Caution);
        if reasoning == NO_CONCERNS {
            reasoning = "May contain traces of allergens due to processing.".to_string();
        } else {
            reasoning
                .push_str(" Product may also contain traces of other allergens due to processing.");
        }
        effects.push(HealthEffect::new(
            "Processing facility",
            "Cross-contamination risk may expose product to trace amounts of various allergens",
        ));
    }

    HealthAnalysis {
        condition: Condition::FoodAllergies,
        recommendation,
        reasoning,
        effects,
    }
}

/// Collapse vocabulary variants: a name is dropped when an already-kept name
/// is a substring of it or vice versa (e.g., "peanut" swallows "peanuts").
fn dedupe_variants<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut kept: Vec<&str> = Vec::new();
    for name in names {
        if !kept
            .iter()
            .any(|k| k.contains(name) || name.contains(k))
        {
            kept.push(name);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AllergenInfo;

    fn with_found(names: &[&str]) -> NutritionData {
        NutritionData {
            allergens: names
                .iter()
                .map(|n| AllergenInfo {
                    name: n.to_string(),
                    found: true,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_found_allergen_forces_avoid() {
        let analysis = analyze_for_allergies(&with_found(&["peanut"]));
        assert_eq!(analysis.recommendation, Recommendation::Avoid);
        assert!(analysis.reasoning.contains("peanut"));
        assert_eq!(analysis.effects.len(), 1);
    }

    #[test]
    fn test_variant_names_collapsed() {
        let analysis = analyze_for_allergies(&with_found(&["peanut", "peanuts", "wheat"]));
        assert!(analysis.reasoning.contains("peanut"));
        assert!(!analysis.reasoning.contains("peanuts"));
        assert!(analysis.reasoning.contains("wheat"));
        assert_eq!(analysis.effects.len(), 2);
    }

    #[test]
    fn test_trace_warning_alone_is_caution() {
        let data = NutritionData {
            ingredients: vec!["may contain traces of nuts".to_string()],
            ..Default::default()
        };
        let analysis = analyze_for_allergies(&data);
        assert_eq!(analysis.recommendation, Recommendation::Caution);
        assert_eq!(
            analysis.reasoning,
            "May contain traces of allergens due to processing."
        );
        assert_eq!(analysis.effects[0].ingredient, "Processing facility");
    }

    #[test]
    fn test_trace_warning_does_not_downgrade_avoid() {
        let mut data = with_found(&["milk"]);
        data.ingredients = vec!["produced in a facility that handles nuts".to_string()];
        let analysis = analyze_for_allergies(&data);
        assert_eq!(analysis.recommendation, Recommendation::Avoid);
        assert!(analysis
            .reasoning
            .contains("may also contain traces of other allergens"));
    }

    #[test]
    fn test_unfound_allergens_are_ignored() {
        let data = NutritionData {
            allergens: vec![AllergenInfo {
                name: "milk".to_string(),
                found: false,
            }],
            ..Default::default()
        };
        let analysis = analyze_for_allergies(&data);
        assert_eq!(analysis.recommendation, Recommendation::Safe);
        assert_eq!(analysis.reasoning, NO_CONCERNS);
    }
}

//! Hypertension evaluator
//!
//! Sodium thresholds plus a table of sodium-carrying and blood-pressure
//! affecting ingredients. Table hits cap at caution; only the numeric
//! sodium threshold can force avoid. That asymmetry is deliberate policy.

use crate::models::{Condition, HealthAnalysis, HealthEffect, NutritionData, Recommendation};

use super::{format_amount, IngredientEffect};

const NO_CONCERNS: &str = "No concerning ingredients found for people with hypertension.";

/// Sodium above this amount (mg) forces avoid
const SODIUM_AVOID_THRESHOLD: f64 = 400.0;
/// Sodium above this amount (mg) warrants caution
const SODIUM_CAUTION_THRESHOLD: f64 = 200.0;

/// Ingredient terms that may affect blood pressure
const BLOOD_PRESSURE_INGREDIENTS: &[IngredientEffect] = &[
    IngredientEffect {
        term: "salt",
        effect: "Increases water retention and blood volume, raising blood pressure",
    },
    IngredientEffect {
        term: "sodium",
        effect: "Causes fluid retention, increasing blood volume and pressure",
    },
    IngredientEffect {
        term: "msg",
        effect: "May temporarily raise blood pressure in some individuals",
    },
    IngredientEffect {
        term: "monosodium glutamate",
        effect: "Can cause temporary blood pressure elevation in sensitive people",
    },
    IngredientEffect {
        term: "baking soda",
        effect: "High sodium content that can contribute to elevated blood pressure",
    },
    IngredientEffect {
        term: "sodium bicarbonate",
        effect: "Contains sodium which can increase blood pressure",
    },
    IngredientEffect {
        term: "sodium nitrate",
        effect: "Used in preserved meats, may contribute to blood pressure issues",
    },
    IngredientEffect {
        term: "sodium benzoate",
        effect: "Preservative that adds sodium to the diet",
    },
    IngredientEffect {
        term: "soy sauce",
        effect: "Very high sodium content that can significantly impact blood pressure",
    },
    IngredientEffect {
        term: "bouillon",
        effect: "Typically high in sodium which can raise blood pressure",
    },
];

/// Evaluate nutrition data for people with hypertension
pub fn analyze_for_hypertension(data: &NutritionData) -> HealthAnalysis {
    let mut recommendation = Recommendation::Safe;
    let mut reasoning = NO_CONCERNS.to_string();
    let mut effects = Vec::new();

    // Check sodium
    if let Some(sodium) = &data.sodium {
        let amount = format!("{}{}", format_amount(sodium.amount), sodium.unit);
        if sodium.amount > SODIUM_AVOID_THRESHOLD {
            recommendation = recommendation.escalate(Recommendation::Avoid);
            reasoning = format!("High sodium content ({amount}) may increase blood pressure.");
            effects.push(HealthEffect::new(
                "Sodium",
                format!("High amount ({amount}) can significantly raise blood pressure"),
            ));
        } else if sodium.amount > SODIUM_CAUTION_THRESHOLD {
            recommendation = recommendation.escalate(Recommendation::Caution);
            reasoning = format!("Moderate sodium content ({amount}) - consume in moderation.");
            effects.push(HealthEffect::new(
                "Sodium",
                format!("Moderate amount ({amount}) may temporarily affect blood pressure"),
            ));
        }
    }

    // Look for ingredients that may affect blood pressure (caution ceiling)
    for ingredient in &data.ingredients {
        for entry in BLOOD_PRESSURE_INGREDIENTS {
            if ingredient.contains(entry.term) {
                recommendation = recommendation.escalate(Recommendation::Caution);
                effects.push(HealthEffect::new(ingredient.clone(), entry.effect));

                if !reasoning.contains(ingredient.as_str()) {
                    if reasoning.ends_with('.') {
                        reasoning.push_str(&format!(
                            " Contains {ingredient} which may affect blood pressure."
                        ));
                    } else {
                        reasoning.push_str(&format!(
                            ", {ingredient} which may affect blood pressure."
                        ));
                    }
                }
            }
        }
    }

    HealthAnalysis {
        condition: Condition::Hypertension,
        recommendation,
        reasoning,
        effects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NutrientInfo, Unit};

    fn with_sodium(amount: f64) -> NutritionData {
        NutritionData {
            sodium: Some(NutrientInfo::new("Sodium", amount, Unit::Mg)),
            ..Default::default()
        }
    }

    #[test]
    fn test_sodium_threshold_boundaries() {
        // 400mg is the caution ceiling; 401mg crosses into avoid
        assert_eq!(
            analyze_for_hypertension(&with_sodium(400.0)).recommendation,
            Recommendation::Caution
        );
        assert_eq!(
            analyze_for_hypertension(&with_sodium(401.0)).recommendation,
            Recommendation::Avoid
        );
        assert_eq!(
            analyze_for_hypertension(&with_sodium(150.0)).recommendation,
            Recommendation::Safe
        );
    }

    #[test]
    fn test_table_hits_cap_at_caution() {
        let data = NutritionData {
            ingredients: vec![
                "soy sauce".to_string(),
                "bouillon".to_string(),
                "sodium nitrate".to_string(),
            ],
            ..Default::default()
        };
        // Many table hits still never exceed caution
        assert_eq!(
            analyze_for_hypertension(&data).recommendation,
            Recommendation::Caution
        );
    }

    #[test]
    fn test_threshold_avoid_not_downgraded_by_table() {
        let mut data = with_sodium(500.0);
        data.ingredients = vec!["salt".to_string()];
        let analysis = analyze_for_hypertension(&data);
        assert_eq!(analysis.recommendation, Recommendation::Avoid);
        assert!(analysis.reasoning.contains("High sodium content (500mg)"));
        assert!(analysis.reasoning.contains("salt"));
    }

    #[test]
    fn test_moderate_sodium_reasoning() {
        let analysis = analyze_for_hypertension(&with_sodium(250.0));
        assert!(analysis
            .reasoning
            .contains("Moderate sodium content (250mg)"));
    }

    #[test]
    fn test_no_data_is_safe() {
        let analysis = analyze_for_hypertension(&NutritionData::default());
        assert_eq!(analysis.recommendation, Recommendation::Safe);
        assert_eq!(analysis.reasoning, NO_CONCERNS);
    }
}

//! Diabetes evaluator
//!
//! Numeric sugar/carbohydrate thresholds plus a high-glycemic ingredient
//! table. Table hits stack: each one bumps the verdict a step, so two
//! concerning ingredients reach avoid.

use crate::models::{Condition, HealthAnalysis, HealthEffect, NutritionData, Recommendation};

use super::{format_amount, IngredientEffect};

const NO_CONCERNS: &str = "No concerning ingredients found for people with diabetes.";

/// Sugars above this amount (g) force avoid
const SUGAR_AVOID_THRESHOLD: f64 = 10.0;
/// Sugars above this amount (g) warrant caution
const SUGAR_CAUTION_THRESHOLD: f64 = 5.0;
/// Carbohydrates above this amount (g) warrant at least caution
const CARB_CAUTION_THRESHOLD: f64 = 30.0;

/// High-glycemic ingredient terms and their effects
const HIGH_GLYCEMIC_INGREDIENTS: &[IngredientEffect] = &[
    IngredientEffect {
        term: "sugar",
        effect: "Raises blood glucose levels rapidly, potentially causing blood sugar spikes",
    },
    IngredientEffect {
        term: "corn syrup",
        effect: "High glycemic index that raises blood glucose quickly and significantly",
    },
    IngredientEffect {
        term: "high fructose",
        effect: "Can increase insulin resistance and may worsen blood glucose control",
    },
    IngredientEffect {
        term: "maltodextrin",
        effect: "Has a high glycemic index that can cause rapid blood sugar increases",
    },
    IngredientEffect {
        term: "dextrose",
        effect: "Pure glucose that rapidly raises blood sugar levels",
    },
    IngredientEffect {
        term: "honey",
        effect: "Natural but still raises blood sugar levels quickly",
    },
    IngredientEffect {
        term: "molasses",
        effect: "Contains concentrated sugars that can spike blood glucose",
    },
    IngredientEffect {
        term: "agave",
        effect: "High in fructose which may negatively impact insulin sensitivity",
    },
    IngredientEffect {
        term: "white flour",
        effect: "Refined carbohydrate that converts quickly to glucose",
    },
    IngredientEffect {
        term: "white bread",
        effect: "Has a high glycemic index and can cause blood sugar spikes",
    },
];

/// Evaluate nutrition data for people with diabetes
pub fn analyze_for_diabetes(data: &NutritionData) -> HealthAnalysis {
    let mut recommendation = Recommendation::Safe;
    let mut reasoning = NO_CONCERNS.to_string();
    let mut effects = Vec::new();

    // Check sugars
    if let Some(sugars) = &data.sugars {
        let amount = format!("{}{}", format_amount(sugars.amount), sugars.unit);
        if sugars.amount > SUGAR_AVOID_THRESHOLD {
            recommendation = recommendation.escalate(Recommendation::Avoid);
            reasoning = format!("High sugar content ({amount}) may cause blood sugar spikes.");
            effects.push(HealthEffect::new(
                "Sugars",
                format!("High amount ({amount}) can cause rapid blood glucose elevation"),
            ));
        } else if sugars.amount > SUGAR_CAUTION_THRESHOLD {
            recommendation = recommendation.escalate(Recommendation::Caution);
            reasoning = format!("Moderate sugar content ({amount}) - consume in moderation.");
            effects.push(HealthEffect::new(
                "Sugars",
                format!("Moderate amount ({amount}) may affect blood glucose levels"),
            ));
        }
    }

    // Check carbohydrates independently of the sugar verdict
    if let Some(carbs) = &data.total_carbohydrates {
        if carbs.amount > CARB_CAUTION_THRESHOLD {
            let amount = format!("{}{}", format_amount(carbs.amount), carbs.unit);
            recommendation = recommendation.escalate(Recommendation::Caution);

            if reasoning == NO_CONCERNS {
                reasoning = format!(
                    "High carbohydrate content ({amount}) - monitor blood sugar after consumption."
                );
            } else {
                reasoning.push_str(&format!(" Also contains high carbohydrates ({amount})."));
            }

            effects.push(HealthEffect::new(
                "Carbohydrates",
                format!("High amount ({amount}) can gradually raise blood glucose levels"),
            ));
        }
    }

    // Look for high-glycemic ingredients
    for ingredient in &data.ingredients {
        for entry in HIGH_GLYCEMIC_INGREDIENTS {
            if ingredient.contains(entry.term) {
                recommendation = recommendation.bump();
                effects.push(HealthEffect::new(ingredient.clone(), entry.effect));

                if !reasoning.contains(ingredient.as_str()) {
                    if reasoning.ends_with('.') {
                        reasoning.push_str(&format!(
                            " Contains {ingredient} which can affect blood sugar levels."
                        ));
                    } else {
                        reasoning.push_str(&format!(
                            ", {ingredient} which can affect blood sugar levels."
                        ));
                    }
                }
            }
        }
    }

    HealthAnalysis {
        condition: Condition::Diabetes,
        recommendation,
        reasoning,
        effects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NutrientInfo, Unit};

    fn with_sugars(amount: f64) -> NutritionData {
        NutritionData {
            sugars: Some(NutrientInfo::new("Sugars", amount, Unit::G)),
            ..Default::default()
        }
    }

    #[test]
    fn test_sugar_threshold_boundaries() {
        // 10g is the caution ceiling; 11g crosses into avoid
        assert_eq!(
            analyze_for_diabetes(&with_sugars(10.0)).recommendation,
            Recommendation::Caution
        );
        assert_eq!(
            analyze_for_diabetes(&with_sugars(11.0)).recommendation,
            Recommendation::Avoid
        );
        assert_eq!(
            analyze_for_diabetes(&with_sugars(5.0)).recommendation,
            Recommendation::Safe
        );
    }

    #[test]
    fn test_high_sugar_records_effect() {
        let analysis = analyze_for_diabetes(&with_sugars(12.0));
        assert!(analysis.reasoning.contains("High sugar content (12g)"));
        assert_eq!(analysis.effects[0].ingredient, "Sugars");
    }

    #[test]
    fn test_carbs_alone_reach_caution() {
        let data = NutritionData {
            total_carbohydrates: Some(NutrientInfo::new("Total Carbohydrates", 35.0, Unit::G)),
            ..Default::default()
        };
        let analysis = analyze_for_diabetes(&data);
        assert_eq!(analysis.recommendation, Recommendation::Caution);
        assert!(analysis.reasoning.contains("High carbohydrate content"));
    }

    #[test]
    fn test_carbs_never_downgrade_an_avoid() {
        let mut data = with_sugars(15.0);
        data.total_carbohydrates = Some(NutrientInfo::new("Total Carbohydrates", 40.0, Unit::G));
        let analysis = analyze_for_diabetes(&data);
        assert_eq!(analysis.recommendation, Recommendation::Avoid);
        assert!(analysis.reasoning.contains("Also contains high carbohydrates"));
    }

    #[test]
    fn test_single_table_hit_is_caution() {
        let data = NutritionData {
            ingredients: vec!["honey".to_string()],
            ..Default::default()
        };
        let analysis = analyze_for_diabetes(&data);
        assert_eq!(analysis.recommendation, Recommendation::Caution);
        assert!(analysis.reasoning.contains("honey"));
    }

    #[test]
    fn test_stacked_table_hits_reach_avoid() {
        let data = NutritionData {
            ingredients: vec!["honey".to_string(), "dextrose".to_string()],
            ..Default::default()
        };
        assert_eq!(
            analyze_for_diabetes(&data).recommendation,
            Recommendation::Avoid
        );
    }

    #[test]
    fn test_table_matches_substrings_of_tokens() {
        let data = NutritionData {
            ingredients: vec!["organic corn syrup solids".to_string()],
            ..Default::default()
        };
        let analysis = analyze_for_diabetes(&data);
        assert_eq!(analysis.recommendation, Recommendation::Caution);
        assert_eq!(analysis.effects[0].ingredient, "organic corn syrup solids");
    }

    #[test]
    fn test_no_data_is_safe_with_baseline_reasoning() {
        let analysis = analyze_for_diabetes(&NutritionData::default());
        assert_eq!(analysis.recommendation, Recommendation::Safe);
        assert_eq!(analysis.reasoning, NO_CONCERNS);
        assert!(analysis.effects.is_empty());
    }
}

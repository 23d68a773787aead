//! Thyroid evaluator
//!
//! Purely table-driven: goitrogenic and iodine-rich ingredient terms.
//! The verdict never exceeds caution; that ceiling is deliberate policy.

use crate::models::{Condition, HealthAnalysis, HealthEffect, NutritionData, Recommendation};

use super::IngredientEffect;

const NO_CONCERNS: &str = "No concerning ingredients found for people with thyroid issues.";

/// Goitrogenic and iodine-rich ingredient terms
const THYROID_INGREDIENTS: &[IngredientEffect] = &[
    IngredientEffect {
        term: "soy",
        effect: "Contains isoflavones that may interfere with thyroid hormone production",
    },
    IngredientEffect {
        term: "soybeans",
        effect: "Can inhibit thyroid hormone synthesis in some individuals",
    },
    IngredientEffect {
        term: "soy protein",
        effect: "May interfere with thyroid medication absorption",
    },
    IngredientEffect {
        term: "tofu",
        effect: "Contains compounds that can affect thyroid function",
    },
    IngredientEffect {
        term: "millet",
        effect: "Contains goitrogens that may interfere with iodine uptake",
    },
    IngredientEffect {
        term: "raw kale",
        effect: "Contains goitrogens that can affect thyroid function if consumed in large amounts",
    },
    IngredientEffect {
        term: "raw spinach",
        effect: "Contains goitrogens that may impact thyroid hormone production",
    },
    IngredientEffect {
        term: "raw broccoli",
        effect: "Contains goitrogens that can interfere with thyroid function",
    },
    IngredientEffect {
        term: "raw cabbage",
        effect: "Contains substances that may inhibit thyroid hormone production",
    },
    IngredientEffect {
        term: "raw cauliflower",
        effect: "Contains goitrogens that may inhibit thyroid function",
    },
    IngredientEffect {
        term: "seaweed",
        effect: "High iodine content which may disrupt thyroid function if consumed excessively",
    },
    IngredientEffect {
        term: "kelp",
        effect: "Very high in iodine which can worsen certain thyroid conditions",
    },
    IngredientEffect {
        term: "iodized salt",
        effect: "High iodine content may affect thyroid function in sensitive individuals",
    },
];

/// Evaluate nutrition data for people with thyroid issues
pub fn analyze_for_thyroid(data: &NutritionData) -> HealthAnalysis {
    let mut recommendation = Recommendation::Safe;
    let mut reasoning = NO_CONCERNS.to_string();
    let mut effects = Vec::new();

    for ingredient in &data.ingredients {
        for entry in THYROID_INGREDIENTS {
            if ingredient.contains(entry.term) {
                recommendation = recommendation.escalate(Recommendation::Caution);
                effects.push(HealthEffect::new(ingredient.clone(), entry.effect));

                if !reasoning.contains(ingredient.as_str()) {
                    if reasoning == NO_CONCERNS {
                        reasoning =
                            format!("Contains {ingredient} which may affect thyroid function.");
                    } else {
                        reasoning.push_str(&format!(
                            " Also contains {ingredient} which may affect thyroid function."
                        ));
                    }
                }
            }
        }
    }

    HealthAnalysis {
        condition: Condition::ThyroidIssues,
        recommendation,
        reasoning,
        effects,
    }
}

//! Condition Rule Evaluators and Aggregator
//!
//! Four independent evaluators with a uniform contract: each consumes the
//! extractor's [`NutritionData`] and produces a [`HealthAnalysis`]. All are
//! pure functions over immutable inputs; severity starts at safe and only
//! escalates, so ingredient order never changes the outcome.

mod allergy;
mod diabetes;
mod hypertension;
mod thyroid;

pub use allergy::analyze_for_allergies;
pub use diabetes::analyze_for_diabetes;
pub use hypertension::analyze_for_hypertension;
pub use thyroid::analyze_for_thyroid;

use crate::models::{Condition, HealthAnalysis, NutritionData, Recommendation, ALL_CONDITIONS};

/// One entry in a condition's ingredient lookup table
///
/// `term` is matched as a substring of each extracted ingredient token;
/// `effect` is the human-readable explanation recorded on a hit.
pub(crate) struct IngredientEffect {
    pub term: &'static str,
    pub effect: &'static str,
}

/// Run all four evaluators in fixed order
///
/// Always returns exactly four analyses: Diabetes, Hypertension, Thyroid
/// Issues, Food Allergies. Evaluators degrade gracefully to safe/"no
/// concerns" on near-empty data.
pub fn analyze_all(data: &NutritionData) -> Vec<HealthAnalysis> {
    ALL_CONDITIONS
        .iter()
        .map(|condition| analyze_condition(*condition, data))
        .collect()
}

/// Run a single evaluator by condition
pub fn analyze_condition(condition: Condition, data: &NutritionData) -> HealthAnalysis {
    match condition {
        Condition::Diabetes => analyze_for_diabetes(data),
        Condition::Hypertension => analyze_for_hypertension(data),
        Condition::ThyroidIssues => analyze_for_thyroid(data),
        Condition::FoodAllergies => analyze_for_allergies(data),
    }
}

/// Worst-case recommendation across a set of analyses
///
/// This is the single value the scan-history collaborator needs to decide
/// whether a scan counts as safe.
pub fn worst_recommendation(analyses: &[HealthAnalysis]) -> Recommendation {
    analyses
        .iter()
        .fold(Recommendation::Safe, |worst, analysis| {
            worst.escalate(analysis.recommendation)
        })
}

/// Format a nutrient amount the way labels print it (no trailing ".0")
pub(crate) fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HealthEffect, NutrientInfo, Unit};

    #[test]
    fn test_aggregator_returns_four_in_fixed_order() {
        let analyses = analyze_all(&NutritionData::default());
        assert_eq!(analyses.len(), 4);
        assert_eq!(analyses[0].condition, Condition::Diabetes);
        assert_eq!(analyses[1].condition, Condition::Hypertension);
        assert_eq!(analyses[2].condition, Condition::ThyroidIssues);
        assert_eq!(analyses[3].condition, Condition::FoodAllergies);
    }

    #[test]
    fn test_empty_data_is_all_safe_with_no_effects() {
        for analysis in analyze_all(&NutritionData::default()) {
            assert_eq!(analysis.recommendation, Recommendation::Safe);
            assert!(analysis.effects.is_empty());
        }
    }

    #[test]
    fn test_ingredient_order_does_not_change_recommendations() {
        let forward = NutritionData {
            sugars: Some(NutrientInfo::new("Sugars", 7.0, Unit::G)),
            ingredients: vec![
                "honey".to_string(),
                "soy sauce".to_string(),
                "kelp".to_string(),
                "dextrose".to_string(),
            ],
            ..Default::default()
        };
        let mut reversed = forward.clone();
        reversed.ingredients.reverse();

        let a = analyze_all(&forward);
        let b = analyze_all(&reversed);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.condition, y.condition);
            assert_eq!(x.recommendation, y.recommendation);
        }
    }

    #[test]
    fn test_worst_recommendation_is_maximum() {
        let mk = |condition, recommendation| HealthAnalysis {
            condition,
            recommendation,
            reasoning: String::new(),
            effects: Vec::<HealthEffect>::new(),
        };
        let analyses = vec![
            mk(Condition::Diabetes, Recommendation::Safe),
            mk(Condition::Hypertension, Recommendation::Caution),
            mk(Condition::ThyroidIssues, Recommendation::Safe),
            mk(Condition::FoodAllergies, Recommendation::Safe),
        ];
        assert_eq!(worst_recommendation(&analyses), Recommendation::Caution);
        assert_eq!(worst_recommendation(&[]), Recommendation::Safe);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12.0), "12");
        assert_eq!(format_amount(2.5), "2.5");
    }
}

//! Health analysis model
//!
//! Conditions, recommendations, and the per-condition analysis record
//! produced by the rule evaluators.

use serde::{Deserialize, Serialize};

/// Health condition screened by the analysis pipeline
///
/// The set is closed; evaluators always run in this declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Diabetes,
    Hypertension,
    ThyroidIssues,
    FoodAllergies,
}

/// All conditions, in evaluation order
pub const ALL_CONDITIONS: [Condition; 4] = [
    Condition::Diabetes,
    Condition::Hypertension,
    Condition::ThyroidIssues,
    Condition::FoodAllergies,
];

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Diabetes => "Diabetes",
            Condition::Hypertension => "Hypertension",
            Condition::ThyroidIssues => "Thyroid Issues",
            Condition::FoodAllergies => "Food Allergies",
        }
    }

    /// Parse a condition name as supplied by a tool caller
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "diabetes" => Some(Condition::Diabetes),
            "hypertension" => Some(Condition::Hypertension),
            "thyroid" | "thyroid issues" | "thyroid_issues" => Some(Condition::ThyroidIssues),
            "allergies" | "food allergies" | "food_allergies" => Some(Condition::FoodAllergies),
            _ => None,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An evaluator's verdict for one condition
///
/// Totally ordered: `Safe < Caution < Avoid`. Within one evaluator run the
/// verdict only ever moves forward along this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    #[default]
    Safe,
    Caution,
    Avoid,
}

impl Recommendation {
    /// Escalate to the more severe of the two verdicts (never regresses)
    pub fn escalate(self, other: Recommendation) -> Recommendation {
        self.max(other)
    }

    /// Move one step toward `Avoid`
    ///
    /// Used by table hits that stack: a second concerning ingredient turns
    /// caution into avoid.
    pub fn bump(self) -> Recommendation {
        match self {
            Recommendation::Safe => Recommendation::Caution,
            Recommendation::Caution | Recommendation::Avoid => Recommendation::Avoid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Safe => "safe",
            Recommendation::Caution => "caution",
            Recommendation::Avoid => "avoid",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One narrative explanation tied to a specific ingredient or nutrient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthEffect {
    pub ingredient: String,
    pub effect: String,
}

impl HealthEffect {
    pub fn new(ingredient: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            effect: effect.into(),
        }
    }
}

/// Result of evaluating one condition against extracted nutrition data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthAnalysis {
    pub condition: Condition,
    pub recommendation: Recommendation,
    pub reasoning: String,
    pub effects: Vec<HealthEffect>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_order() {
        assert!(Recommendation::Safe < Recommendation::Caution);
        assert!(Recommendation::Caution < Recommendation::Avoid);
    }

    #[test]
    fn test_escalate_never_regresses() {
        assert_eq!(
            Recommendation::Avoid.escalate(Recommendation::Safe),
            Recommendation::Avoid
        );
        assert_eq!(
            Recommendation::Safe.escalate(Recommendation::Caution),
            Recommendation::Caution
        );
        assert_eq!(
            Recommendation::Caution.escalate(Recommendation::Caution),
            Recommendation::Caution
        );
    }

    #[test]
    fn test_bump_saturates_at_avoid() {
        assert_eq!(Recommendation::Safe.bump(), Recommendation::Caution);
        assert_eq!(Recommendation::Caution.bump(), Recommendation::Avoid);
        assert_eq!(Recommendation::Avoid.bump(), Recommendation::Avoid);
    }

    #[test]
    fn test_condition_from_str() {
        assert_eq!(Condition::from_str("Diabetes"), Some(Condition::Diabetes));
        assert_eq!(
            Condition::from_str("thyroid issues"),
            Some(Condition::ThyroidIssues)
        );
        assert_eq!(
            Condition::from_str("food_allergies"),
            Some(Condition::FoodAllergies)
        );
        assert_eq!(Condition::from_str("gout"), None);
    }

    #[test]
    fn test_recommendation_serializes_lowercase() {
        let json = serde_json::to_string(&Recommendation::Caution).unwrap();
        assert_eq!(json, "\"caution\"");
    }
}

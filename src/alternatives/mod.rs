//! Alternative Suggester
//!
//! Post-processes the aggregator's output: analyses flagged caution or
//! avoid are matched against condition-specific reasoning keywords, and
//! each match expands to canned alternative-product records. When the
//! ingredient text carries a coarse product-type hint (biscuit, chips,
//! soup), the more specific record for that condition is preferred over
//! the generic ones. This is template expansion, not ranking or search.

use crate::models::{
    AlternativeProduct, Condition, HealthAnalysis, NutritionData, Recommendation,
};

/// Maximum number of suggestions returned
const MAX_SUGGESTIONS: usize = 4;

/// Reasoning keywords that trigger suggestions, per condition
const CONDITION_KEYWORDS: &[(Condition, &[&str])] = &[
    (Condition::Diabetes, &["sugar", "carbohydrate"]),
    (Condition::Hypertension, &["sodium", "salt"]),
    (Condition::ThyroidIssues, &["soy", "goitrogen"]),
    (Condition::FoodAllergies, &["allergen"]),
];

/// One canned suggestion record
struct SuggestionRule {
    condition: Condition,
    /// Product-type hint terms; when set, the rule only fires if one of
    /// them appears in the ingredient text, and it takes precedence over
    /// the condition's generic rules.
    hint: Option<&'static [&'static str]>,
    name: &'static str,
    reason: &'static str,
    category: &'static str,
    benefits: &'static [&'static str],
}

/// Product-type specific rules, checked before the generic table
const SPECIFIC_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        condition: Condition::Diabetes,
        hint: Some(&["biscuit", "cookie", "cracker"]),
        name: "Whole grain sugar-free biscuits",
        reason: "Whole grains and sweetener substitutes avoid glucose spikes",
        category: "Biscuits & Snacks",
        benefits: &[
            "No refined sugar",
            "Higher fiber content",
            "Slower glucose release",
        ],
    },
    SuggestionRule {
        condition: Condition::Hypertension,
        hint: Some(&["chips", "crisps"]),
        name: "Unsalted or lightly salted baked chips",
        reason: "Baked low-salt snacks cut sodium without losing crunch",
        category: "Snacks",
        benefits: &[
            "Much lower sodium",
            "Less saturated fat than fried",
            "Heart-healthy snacking",
        ],
    },
    SuggestionRule {
        condition: Condition::Hypertension,
        hint: Some(&["soup", "broth", "bouillon"]),
        name: "Low-sodium soup or homemade broth",
        reason: "Prepared soups are a major hidden sodium source",
        category: "Soups",
        benefits: &[
            "Controlled sodium content",
            "No flavor-enhancer additives",
            "Heart-healthy",
        ],
    },
];

/// Generic per-condition rules
const GENERIC_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        condition: Condition::Diabetes,
        hint: None,
        name: "Sugar-free or stevia-sweetened alternatives",
        reason: "Lower glycemic index, won't spike blood sugar",
        category: "Sweeteners",
        benefits: &[
            "No blood sugar spikes",
            "Maintains stable glucose levels",
            "Suitable for diabetic diet",
        ],
    },
    SuggestionRule {
        condition: Condition::Diabetes,
        hint: None,
        name: "Whole grain or high-fiber versions",
        reason: "Fiber slows sugar absorption",
        category: "Grains & Cereals",
        benefits: &[
            "Slower glucose release",
            "Higher fiber content",
            "Better blood sugar control",
        ],
    },
    SuggestionRule {
        condition: Condition::Hypertension,
        hint: None,
        name: "Low-sodium or no-salt-added versions",
        reason: "Reduces sodium intake to help manage blood pressure",
        category: "Low-Sodium Foods",
        benefits: &[
            "Reduced blood pressure risk",
            "Heart-healthy",
            "Lower fluid retention",
        ],
    },
    SuggestionRule {
        condition: Condition::Hypertension,
        hint: None,
        name: "Fresh herbs and spices for flavor",
        reason: "Natural flavor enhancement without sodium",
        category: "Seasonings",
        benefits: &[
            "No added sodium",
            "Antioxidant properties",
            "Natural flavor enhancement",
        ],
    },
    SuggestionRule {
        condition: Condition::ThyroidIssues,
        hint: None,
        name: "Iodine-rich seafood and seaweed (in moderation)",
        reason: "Supports thyroid function when consumed appropriately",
        category: "Seafood",
        benefits: &[
            "Natural iodine source",
            "Supports thyroid health",
            "High-quality protein",
        ],
    },
    SuggestionRule {
        condition: Condition::ThyroidIssues,
        hint: None,
        name: "Selenium-rich foods like Brazil nuts",
        reason: "Selenium supports thyroid hormone production",
        category: "Nuts & Seeds",
        benefits: &[
            "Supports thyroid function",
            "Antioxidant properties",
            "Healthy fats",
        ],
    },
    SuggestionRule {
        condition: Condition::FoodAllergies,
        hint: None,
        name: "Certified allergen-free alternatives",
        reason: "Manufactured in allergen-free facilities",
        category: "Allergen-Free Products",
        benefits: &[
            "No cross-contamination risk",
            "Safe for allergic individuals",
            "Peace of mind",
        ],
    },
    SuggestionRule {
        condition: Condition::FoodAllergies,
        hint: None,
        name: "Naturally allergen-free whole foods",
        reason: "Simple, unprocessed foods reduce allergy risk",
        category: "Whole Foods",
        benefits: &[
            "Minimal processing",
            "Known ingredients",
            "Lower allergy risk",
        ],
    },
];

/// Generate alternative-product suggestions from triggered analyses
///
/// Deduplicates by name, preserves insertion order, and caps the result
/// at four records.
pub fn suggest_alternatives(
    analyses: &[HealthAnalysis],
    data: Option<&NutritionData>,
) -> Vec<AlternativeProduct> {
    let ingredient_text = data
        .map(|d| d.ingredients.join(" "))
        .unwrap_or_default();

    let mut suggestions: Vec<AlternativeProduct> = Vec::new();

    for analysis in analyses {
        if analysis.recommendation < Recommendation::Caution {
            continue;
        }
        if !keywords_match(analysis) {
            continue;
        }

        // Product-type specific rules take precedence over the generics
        let specific = SPECIFIC_RULES.iter().filter(|rule| {
            rule.condition == analysis.condition
                && rule
                    .hint
                    .is_some_and(|terms| terms.iter().any(|t| ingredient_text.contains(t)))
        });
        let generic = GENERIC_RULES
            .iter()
            .filter(|rule| rule.condition == analysis.condition);

        for rule in specific.chain(generic) {
            if suggestions.iter().any(|s| s.name == rule.name) {
                continue;
            }
            suggestions.push(AlternativeProduct {
                name: rule.name.to_string(),
                reason: rule.reason.to_string(),
                category: rule.category.to_string(),
                benefits: rule.benefits.iter().map(|b| b.to_string()).collect(),
            });
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// True when the analysis reasoning mentions one of its condition's keywords
fn keywords_match(analysis: &HealthAnalysis) -> bool {
    let reasoning = analysis.reasoning.to_lowercase();
    CONDITION_KEYWORDS
        .iter()
        .find(|(condition, _)| *condition == analysis.condition)
        .map(|(_, keywords)| keywords.iter().any(|k| reasoning.contains(k)))
        .unwrap_or(false)
}

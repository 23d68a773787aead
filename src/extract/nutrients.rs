//! Nutrient value extraction
//!
//! Each nutrient is matched by an ordered cascade of typed strategies,
//! from explicit "name value unit" down to "name followed by the first
//! number". The first strategy that matches wins; no cross-strategy
//! reconciliation is attempted.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{NutrientInfo, NutritionData, Unit};

/// Which `NutritionData` field a matcher feeds
#[derive(Debug, Clone, Copy)]
enum NutrientField {
    Calories,
    TotalFat,
    SaturatedFat,
    Cholesterol,
    Sodium,
    TotalCarbohydrates,
    DietaryFiber,
    Sugars,
    Protein,
}

/// One pattern in a nutrient's extraction cascade
struct Strategy {
    regex: Regex,
    /// Whether capture group 2 holds an explicit unit token
    captures_unit: bool,
}

/// Full extraction cascade for one nutrient
struct NutrientMatcher {
    field: NutrientField,
    /// Display name used in the extracted `NutrientInfo`
    name: &'static str,
    /// Unit assumed when the label omits one
    default_unit: Unit,
    strategies: Vec<Strategy>,
}

/// How far past the nutrient name the lenient strategy may look for a number
const LENIENT_WINDOW: usize = 20;

fn build_matcher(
    field: NutrientField,
    name: &'static str,
    label_pattern: &str,
    default_unit: Unit,
) -> NutrientMatcher {
    let strategies = vec![
        // "name value unit" (colon optional, unit token required)
        Strategy {
            regex: Regex::new(&format!(
                r"{label_pattern}\s*:?\s*(\d+(?:\.\d+)?)\s*(g|mg|kcal)\b"
            ))
            .expect("invalid nutrient pattern"),
            captures_unit: true,
        },
        // "name: value" (unit falls back to the nutrient default)
        Strategy {
            regex: Regex::new(&format!(r"{label_pattern}\s*:\s*(\d+(?:\.\d+)?)"))
                .expect("invalid nutrient pattern"),
            captures_unit: false,
        },
        // "name ... first number" within a short window
        Strategy {
            regex: Regex::new(&format!(
                r"{label_pattern}[^0-9]{{0,{LENIENT_WINDOW}}}(\d+(?:\.\d+)?)"
            ))
            .expect("invalid nutrient pattern"),
            captures_unit: false,
        },
    ];

    NutrientMatcher {
        field,
        name,
        default_unit,
        strategies,
    }
}

/// Extraction cascades for the fixed nutrient set
static MATCHERS: LazyLock<Vec<NutrientMatcher>> = LazyLock::new(|| {
    vec![
        build_matcher(NutrientField::Calories, "Calories", r"calories", Unit::Kcal),
        build_matcher(NutrientField::TotalFat, "Total Fat", r"total fat", Unit::G),
        build_matcher(
            NutrientField::SaturatedFat,
            "Saturated Fat",
            r"saturated fat",
            Unit::G,
        ),
        build_matcher(
            NutrientField::Cholesterol,
            "Cholesterol",
            r"cholesterol",
            Unit::Mg,
        ),
        build_matcher(NutrientField::Sodium, "Sodium", r"sodium", Unit::Mg),
        build_matcher(
            NutrientField::TotalCarbohydrates,
            "Total Carbohydrates",
            r"total carbohydrates?",
            Unit::G,
        ),
        build_matcher(
            NutrientField::DietaryFiber,
            "Dietary Fiber",
            r"dietary fib(?:er|re)",
            Unit::G,
        ),
        build_matcher(NutrientField::Sugars, "Sugars", r"sugars?", Unit::G),
        build_matcher(NutrientField::Protein, "Protein", r"protein", Unit::G),
    ]
});

/// Run every nutrient cascade over the normalized text, filling `data`
pub fn apply(normalized: &str, data: &mut NutritionData) {
    for matcher in MATCHERS.iter() {
        let Some(info) = run_cascade(normalized, matcher) else {
            continue;
        };
        match matcher.field {
            NutrientField::Calories => data.calories = Some(info),
            NutrientField::TotalFat => data.total_fat = Some(info),
            NutrientField::SaturatedFat => data.saturated_fat = Some(info),
            NutrientField::Cholesterol => data.cholesterol = Some(info),
            NutrientField::Sodium => data.sodium = Some(info),
            NutrientField::TotalCarbohydrates => data.total_carbohydrates = Some(info),
            NutrientField::DietaryFiber => data.dietary_fiber = Some(info),
            NutrientField::Sugars => data.sugars = Some(info),
            NutrientField::Protein => data.protein = Some(info),
        }
    }
}

/// Try each strategy in order; first match wins
fn run_cascade(normalized: &str, matcher: &NutrientMatcher) -> Option<NutrientInfo> {
    for strategy in &matcher.strategies {
        let Some(caps) = strategy.regex.captures(normalized) else {
            continue;
        };
        let Ok(amount) = caps[1].parse::<f64>() else {
            continue;
        };
        let unit = if strategy.captures_unit {
            Unit::from_str(&caps[2]).unwrap_or(matcher.default_unit)
        } else {
            matcher.default_unit
        };
        return Some(NutrientInfo::new(matcher.name, amount, unit));
    }
    None
}

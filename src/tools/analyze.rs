//! Label Analysis Tools
//!
//! Orchestrates the extraction and evaluation pipeline for the MCP tools
//! and defines their serializable responses.

use chrono::Utc;
use serde::Serialize;

use crate::alternatives::suggest_alternatives;
use crate::analysis::{analyze_all, analyze_condition, worst_recommendation};
use crate::extract::extract_nutrition;
use crate::models::{
    AlternativeProduct, Condition, HealthAnalysis, NutritionData, Recommendation,
};

use super::ToolError;

/// Full pipeline response for scan_label
#[derive(Debug, Serialize)]
pub struct ScanReport {
    /// Structured facts extracted from the label text
    pub nutrition: NutritionData,
    /// One analysis per condition, in fixed order
    pub analyses: Vec<HealthAnalysis>,
    /// Alternative products derived from the triggered analyses
    pub alternatives: Vec<AlternativeProduct>,
    /// Worst-case recommendation across all conditions
    pub overall: Recommendation,
    pub analyzed_at: String,
}

/// Response for parse_label
#[derive(Debug, Serialize)]
pub struct ParseReport {
    pub nutrition: NutritionData,
    pub ingredients_found: usize,
    pub allergens_found: usize,
}

/// Response for check_condition
#[derive(Debug, Serialize)]
pub struct ConditionReport {
    pub analysis: HealthAnalysis,
    pub analyzed_at: String,
}

/// Response for suggest_alternatives
#[derive(Debug, Serialize)]
pub struct AlternativesReport {
    pub alternatives: Vec<AlternativeProduct>,
    /// Conditions whose analysis came back caution or avoid
    pub triggered_conditions: Vec<Condition>,
}

/// Run the full pipeline: extract, evaluate all conditions, suggest
/// alternatives, and compute the worst-case verdict.
pub fn scan_label(text: &str) -> ScanReport {
    let nutrition = extract_nutrition(text);
    let analyses = analyze_all(&nutrition);
    let alternatives = suggest_alternatives(&analyses, Some(&nutrition));
    let overall = worst_recommendation(&analyses);

    tracing::debug!(
        "Scanned label: {} ingredients, overall {}",
        nutrition.ingredients.len(),
        overall
    );

    ScanReport {
        nutrition,
        analyses,
        alternatives,
        overall,
        analyzed_at: Utc::now().to_rfc3339(),
    }
}

/// Run the extractor only
pub fn parse_label(text: &str) -> ParseReport {
    let nutrition = extract_nutrition(text);
    let ingredients_found = nutrition.ingredients.len();
    let allergens_found = nutrition.found_allergens().count();
    ParseReport {
        nutrition,
        ingredients_found,
        allergens_found,
    }
}

/// Run a single condition evaluator against the label text
pub fn check_condition(text: &str, condition_name: &str) -> Result<ConditionReport, ToolError> {
    let condition = Condition::from_str(condition_name)
        .ok_or_else(|| ToolError::UnknownCondition(condition_name.to_string()))?;

    let nutrition = extract_nutrition(text);
    Ok(ConditionReport {
        analysis: analyze_condition(condition, &nutrition),
        analyzed_at: Utc::now().to_rfc3339(),
    })
}

/// Run the pipeline and return only the alternative suggestions
pub fn alternatives_for_label(text: &str) -> AlternativesReport {
    let nutrition = extract_nutrition(text);
    let analyses = analyze_all(&nutrition);
    let alternatives = suggest_alternatives(&analyses, Some(&nutrition));
    let triggered_conditions = analyses
        .iter()
        .filter(|a| a.recommendation >= Recommendation::Caution)
        .map(|a| a.condition)
        .collect();

    AlternativesReport {
        alternatives,
        triggered_conditions,
    }
}

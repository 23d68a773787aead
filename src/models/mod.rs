//! Data models
//!
//! Rust structs for the label analysis pipeline: extracted nutrition
//! facts, per-condition analyses, and alternative product suggestions.

mod alternative;
mod analysis;
mod nutrient;
mod nutrition_data;

pub use alternative::AlternativeProduct;
pub use analysis::{Condition, HealthAnalysis, HealthEffect, Recommendation, ALL_CONDITIONS};
pub use nutrient::{NutrientInfo, Unit};
pub use nutrition_data::{AllergenInfo, NutritionData};

//! Alternative product model
//!
//! A canned healthier-product suggestion derived from triggered analyses.

use serde::{Deserialize, Serialize};

/// One suggested alternative product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeProduct {
    /// Product or product-family name
    pub name: String,
    /// Why this alternative helps for the triggering condition
    pub reason: String,
    /// Coarse product category (e.g., "Sweeteners", "Low-Sodium Foods")
    pub category: String,
    /// Short benefit statements shown alongside the suggestion
    pub benefits: Vec<String>,
}

//! Nutrient value model
//!
//! A single measured nutrient from a label, with its unit.

use serde::{Deserialize, Serialize};

/// Measurement unit for a nutrient value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Grams (solids: fat, carbs, sugars, protein, fiber)
    G,
    /// Milligrams (sodium, cholesterol)
    Mg,
    /// Kilocalories (energy)
    Kcal,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::G => "g",
            Unit::Mg => "mg",
            Unit::Kcal => "kcal",
        }
    }

    /// Parse a unit token from label text
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Some(Unit::G),
            "mg" | "milligram" | "milligrams" => Some(Unit::Mg),
            "kcal" | "cal" | "calories" => Some(Unit::Kcal),
            _ => None,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One measured nutrient value from the label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientInfo {
    /// Display name (e.g., "Sodium", "Total Carbohydrates")
    pub name: String,
    /// Measured amount
    pub amount: f64,
    /// Unit of the amount
    pub unit: Unit,
}

impl NutrientInfo {
    pub fn new(name: impl Into<String>, amount: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            amount,
            unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parse() {
        assert_eq!(Unit::from_str("g"), Some(Unit::G));
        assert_eq!(Unit::from_str("MG"), Some(Unit::Mg));
        assert_eq!(Unit::from_str("kcal"), Some(Unit::Kcal));
        assert_eq!(Unit::from_str("oz"), None);
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(Unit::G.to_string(), "g");
        assert_eq!(Unit::Mg.to_string(), "mg");
        assert_eq!(Unit::Kcal.to_string(), "kcal");
    }
}

//! NutriScan Tools module
//!
//! MCP tool implementations for label analysis.

pub mod analyze;
pub mod status;

use thiserror::Error;

/// Errors surfaced by the tool layer
///
/// The core pipeline itself never fails; these cover caller mistakes at
/// the tool boundary.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error(
        "Unknown condition: '{0}' (expected diabetes, hypertension, thyroid issues, or food allergies)"
    )]
    UnknownCondition(String),
}

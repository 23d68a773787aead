//! NutriScan MCP Server Implementation
//!
//! Implements the MCP server with all NutriScan tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::tools::analyze;
use crate::tools::status::{StatusTracker, LABEL_INSTRUCTIONS};
use crate::tools::ToolError;

/// NutriScan MCP Service
#[derive(Clone)]
pub struct NutriScanService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<NutriScanService>,
}

impl NutriScanService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for NutriScanService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScanLabelParams {
    /// Raw label text (typically OCR output). Any string is accepted.
    pub text: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ParseLabelParams {
    /// Raw label text (typically OCR output). Any string is accepted.
    pub text: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CheckConditionParams {
    /// Raw label text (typically OCR output). Any string is accepted.
    pub text: String,
    /// Condition name: diabetes, hypertension, thyroid issues, or food allergies
    pub condition: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SuggestAlternativesParams {
    /// Raw label text (typically OCR output). Any string is accepted.
    pub text: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutriScanService {
    // --- Status ---

    #[tool(description = "Get the current status of the NutriScan service including build info and process information")]
    async fn nutriscan_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get step-by-step instructions for analyzing nutrition labels. Call this when starting a new label analysis session or when unsure how to use the scanning tools.")]
    fn label_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            LABEL_INSTRUCTIONS,
        )]))
    }

    // --- Label Analysis ---

    #[tool(description = "Analyze nutrition label text end to end: extract nutrition facts, evaluate all four health conditions (diabetes, hypertension, thyroid issues, food allergies), suggest alternative products, and report the overall worst-case recommendation")]
    async fn scan_label(&self, Parameters(p): Parameters<ScanLabelParams>) -> Result<CallToolResult, McpError> {
        let report = analyze::scan_label(&p.text);

        // Count the scan for the status tool
        {
            let mut tracker = self.status_tracker.lock().await;
            tracker.record_scan();
        }

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Extract structured nutrition facts from label text without health evaluation: ingredient list, nutrient values, and allergen detection")]
    fn parse_label(&self, Parameters(p): Parameters<ParseLabelParams>) -> Result<CallToolResult, McpError> {
        let report = analyze::parse_label(&p.text);
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Evaluate label text for a single health condition. Condition must be one of: diabetes, hypertension, thyroid issues, food allergies")]
    fn check_condition(&self, Parameters(p): Parameters<CheckConditionParams>) -> Result<CallToolResult, McpError> {
        let report = analyze::check_condition(&p.text, &p.condition).map_err(|e| match e {
            ToolError::UnknownCondition(_) => McpError::invalid_params(e.to_string(), None),
        })?;
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Analyze label text and return only the alternative product suggestions plus the conditions that triggered them")]
    fn suggest_alternatives(&self, Parameters(p): Parameters<SuggestAlternativesParams>) -> Result<CallToolResult, McpError> {
        let report = analyze::alternatives_for_label(&p.text);
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutriScanService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutriscan".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("NutriScan Label Analysis".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "NutriScan - nutrition label analysis for health conditions. \
                 IMPORTANT: Call label_instructions when starting a session. \
                 Main flow: scan_label takes raw OCR text and returns extracted nutrition facts, \
                 one analysis per condition (diabetes, hypertension, thyroid issues, food allergies), \
                 alternative product suggestions, and the overall worst-case recommendation. \
                 Extraction only: parse_label. Single condition: check_condition. \
                 Alternatives only: suggest_alternatives. \
                 Any text is accepted; empty or unreadable text yields a safe/no-concerns result, \
                 never an error."
                    .into(),
            ),
        }
    }
}

//! JSON output formatting.

use anyhow::Result;
use serde::Serialize;
use tfcost_core::CostSummary;
use tfcost_fetch::EstimateError;

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for one estimate.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateOutput<'a> {
    pub directory: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<&'a CostSummary>,
    /// The same text the MCP tool returns.
    pub text: String,
    /// True if priced resources were left out of `text`.
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> EstimateOutput<'a> {
    /// Builds the output for an estimate result.
    pub fn new(directory: &'a str, result: &'a Result<CostSummary, EstimateError>) -> Self {
        match result {
            Ok(summary) => Self {
                directory,
                summary: Some(summary),
                text: summary.render(),
                truncated: summary.is_truncated(),
                error: None,
            },
            Err(e) => Self {
                directory,
                summary: None,
                text: format!("{}{e}", tfcost_fetch::ERROR_PREFIX),
                truncated: false,
                error: Some(e.to_string()),
            },
        }
    }
}

/// JSON output for the check command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutput {
    pub command: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub timeout_secs: u64,
}

// ============================================================================
// Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serializes any value.
    pub fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

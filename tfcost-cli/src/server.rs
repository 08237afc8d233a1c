//! MCP server exposing the Terraform cost estimate tool.
//!
//! The server registers one tool, `get_terraform_cost_estimate`, which
//! always answers with text: the cost summary, or `Error: <message>`.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Deserialize;
use tfcost_fetch::InfracostEstimator;
use tracing::{debug, instrument};

/// Name advertised to MCP clients.
pub const SERVER_NAME: &str = "infracost-mcp";

const INSTRUCTIONS: &str = "Estimates the monthly cloud cost of Terraform code with Infracost. \
Call get_terraform_cost_estimate with the directory holding the .tf files. \
Results starting with 'Error:' are failures.";

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters of `get_terraform_cost_estimate`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CostEstimateRequest {
    /// Directory containing the Terraform code. Defaults to ".".
    #[serde(default = "default_tf_directory")]
    pub tf_directory: String,
}

fn default_tf_directory() -> String {
    ".".to_string()
}

// ============================================================================
// Server
// ============================================================================

/// MCP server handler.
#[derive(Clone)]
pub struct CostServer {
    estimator: Arc<InfracostEstimator>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CostServer {
    /// Creates a server backed by the given estimator.
    pub fn new(estimator: InfracostEstimator) -> Self {
        Self {
            estimator: Arc::new(estimator),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Estimate monthly cost using Infracost.")]
    async fn get_terraform_cost_estimate(
        &self,
        Parameters(request): Parameters<CostEstimateRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.estimate_text(&request).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Runs one estimate and returns the tool's text answer.
    #[instrument(skip_all, fields(dir = %request.tf_directory))]
    async fn estimate_text(&self, request: &CostEstimateRequest) -> String {
        let text = self.estimator.summarize(&request.tf_directory).await;
        debug!(
            failed = text.starts_with(tfcost_fetch::ERROR_PREFIX),
            "Cost estimate tool call finished"
        );
        text
    }
}

#[tool_handler]
impl ServerHandler for CostServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

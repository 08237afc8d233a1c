//! Serve command - run the MCP server on stdio.

use anyhow::Result;
use rmcp::{ServiceExt, transport::stdio};
use tfcost_fetch::InfracostEstimator;
use tracing::{error, info, warn};

use crate::server::CostServer;

/// Runs the MCP server until the client disconnects.
pub async fn run(estimator: InfracostEstimator) -> Result<()> {
    if !estimator.is_available() {
        // Calls still return "Error: ..." text; the server stays up
        warn!(
            cmd = %estimator.config().command,
            "Infracost binary not found, estimates will fail until it is installed"
        );
    }

    info!(
        cmd = %estimator.config().command,
        timeout = ?estimator.config().timeout,
        "Starting MCP server on stdio"
    );

    let service = CostServer::new(estimator)
        .serve(stdio())
        .await
        .inspect_err(|e| error!(error = %e, "Failed to start MCP server"))?;

    let reason = service.waiting().await?;
    info!(reason = ?reason, "MCP server stopped");

    Ok(())
}

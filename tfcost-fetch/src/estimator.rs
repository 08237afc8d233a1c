//! Infracost estimator.
//!
//! Runs `infracost breakdown --path <dir> --format json`, decodes the report
//! and condenses it into a [`CostSummary`].

use std::path::PathBuf;
use std::time::Duration;

use tfcost_core::{CostReport, CostSummary};
use tracing::{debug, info, instrument, warn};

use crate::error::EstimateError;
use crate::host::process::ProcessRunner;

/// Command used when no binary is configured.
pub const DEFAULT_COMMAND: &str = "infracost";

/// Default per-call timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Prefix of every failure returned by [`InfracostEstimator::summarize`].
pub const ERROR_PREFIX: &str = "Error: ";

// ============================================================================
// Configuration
// ============================================================================

/// Estimator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Binary name (looked up on `PATH`) or path to the binary.
    pub command: String,
    /// Upper bound on a single `breakdown` run.
    pub timeout: Duration,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl EstimatorConfig {
    /// Sets the binary to run.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Sets the per-call timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ============================================================================
// Estimator
// ============================================================================

/// Runs Infracost and summarizes its report.
///
/// Holds no state between calls; one child process is spawned per estimate.
#[derive(Debug, Clone, Default)]
pub struct InfracostEstimator {
    runner: ProcessRunner,
    config: EstimatorConfig,
}

impl InfracostEstimator {
    /// Creates an estimator with the given configuration.
    pub fn new(config: EstimatorConfig) -> Self {
        Self::with_runner(ProcessRunner::new(), config)
    }

    /// Creates an estimator with a specific process runner.
    pub fn with_runner(runner: ProcessRunner, config: EstimatorConfig) -> Self {
        Self { runner, config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Arguments for a JSON breakdown of `directory`.
    pub fn breakdown_args(directory: &str) -> [&str; 5] {
        ["breakdown", "--path", directory, "--format", "json"]
    }

    /// Estimates the monthly cost of the Terraform code in `directory`.
    #[instrument(skip(self), fields(cmd = %self.config.command))]
    pub async fn estimate(&self, directory: &str) -> Result<CostSummary, EstimateError> {
        info!("Running cost breakdown");

        let output = self
            .runner
            .run_with_timeout(
                &self.config.command,
                &Self::breakdown_args(directory),
                self.config.timeout,
            )
            .await?;

        if !output.success() {
            warn!(
                exit_code = output.exit_code,
                stderr = %output.stderr.trim(),
                "Cost breakdown failed"
            );
        }
        let stdout = output.stdout_if_success()?;

        let report = CostReport::from_json(stdout)?;
        let summary = CostSummary::from_report(&report);

        debug!(
            total = %summary.total,
            currency = %summary.currency,
            priced = summary.priced_resources,
            duration = ?output.duration,
            "Cost breakdown summarized"
        );

        Ok(summary)
    }

    /// Estimates and renders the summary text.
    ///
    /// Never fails: any error is returned as `Error: <message>`.
    pub async fn summarize(&self, directory: &str) -> String {
        match self.estimate(directory).await {
            Ok(summary) => summary.render(),
            Err(e) => format!("{ERROR_PREFIX}{e}"),
        }
    }

    /// Returns true if the configured binary can be found.
    pub fn is_available(&self) -> bool {
        self.runner.command_exists(&self.config.command)
    }

    /// Returns the resolved path of the configured binary.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.runner.which(&self.config.command)
    }

    /// Detects the installed Infracost version, e.g. `v0.10.38`.
    pub async fn version(&self) -> Option<String> {
        let output = self
            .runner
            .run(&self.config.command, &["--version"])
            .await
            .ok()?;

        let stdout = output.stdout_if_success().ok()?;
        parse_version(stdout)
    }
}

/// Parses `infracost --version` output ("Infracost v0.10.38").
fn parse_version(output: &str) -> Option<String> {
    let trimmed = output.lines().next()?.trim();

    if let Some(version) = trimmed.strip_prefix("Infracost ") {
        Some(version.trim().to_string())
    } else if !trimmed.is_empty() {
        Some(trimmed.to_string())
    } else {
        None
    }
}

// ============================================================================
// Tests
// ============================================================================

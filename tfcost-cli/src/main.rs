// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! tfcost - Terraform cost estimates from Infracost.
//!
//! # Examples
//!
//! ```bash
//! # Run the MCP server on stdio (default)
//! tfcost
//!
//! # One-shot estimate of a directory
//! tfcost estimate ./infra
//!
//! # JSON output
//! tfcost estimate ./infra --format json --pretty
//!
//! # Use a specific Infracost binary
//! tfcost --infracost-bin /usr/local/bin/infracost estimate
//!
//! # Check that Infracost is installed
//! tfcost check
//! ```

mod commands;
mod output;
mod server;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tfcost_fetch::{
    DEFAULT_COMMAND, ERROR_PREFIX, EstimateError, EstimatorConfig, InfracostEstimator,
};
use tfcost_store::{LogLevel, Settings, SettingsStore};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{check, config, estimate, serve};

// ============================================================================
// CLI Definition
// ============================================================================

/// tfcost - Terraform cost estimates from Infracost.
#[derive(Parser)]
#[command(name = "tfcost")]
#[command(about = "Terraform cost estimates from Infracost, as an MCP tool and a CLI")]
#[command(long_about = r#"
tfcost runs `infracost breakdown` on a Terraform directory and condenses the
report into the total monthly cost plus the five most expensive resources.

With no subcommand it serves the `get_terraform_cost_estimate` tool over
MCP on stdio.

Examples:
  tfcost                         # MCP server on stdio
  tfcost estimate ./infra        # One-shot estimate
  tfcost estimate --format json  # JSON output
  tfcost check                   # Is Infracost installed?
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'serve' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Infracost binary name or path (default: `infracost` on PATH).
    #[arg(long, env = "TFCOST_INFRACOST_BIN", global = true)]
    pub infracost_bin: Option<String>,

    /// Timeout in seconds for a single Infracost run.
    #[arg(long, env = "TFCOST_TIMEOUT_SECS", global = true,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Settings file to use instead of the default location.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (no logging, no error messages).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the cost estimate tool over MCP on stdio (default).
    Serve,

    /// Estimate the monthly cost of a Terraform directory.
    #[command(visible_alias = "e")]
    Estimate(estimate::EstimateArgs),

    /// Check that Infracost is installed and runnable.
    Check,

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

impl Cli {
    /// Builds the estimator configuration.
    ///
    /// Flags and environment win over the settings file, which wins over
    /// built-in defaults.
    pub fn estimator_config(&self, settings: &Settings) -> EstimatorConfig {
        let command = self
            .infracost_bin
            .clone()
            .or_else(|| settings.infracost_bin.clone())
            .unwrap_or_else(|| DEFAULT_COMMAND.to_string());

        let timeout = self
            .timeout
            .map_or_else(|| settings.timeout(), Duration::from_secs);

        EstimatorConfig::default()
            .with_command(command)
            .with_timeout(timeout)
    }

    /// Builds an estimator from flags and settings.
    pub fn estimator(&self, settings: &Settings) -> InfracostEstimator {
        InfracostEstimator::new(self.estimator_config(settings))
    }

    /// Loads settings from `--config` or the default location.
    async fn settings_store(&self) -> Result<SettingsStore> {
        let store = match &self.config {
            Some(path) => SettingsStore::load(path.clone()).await?,
            None => SettingsStore::load_default().await?,
        };
        Ok(store)
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

/// Logs go to stderr; stdout carries MCP messages in `serve`.
fn setup_logging(verbose: bool, quiet: bool, level: LogLevel) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("tfcost=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("tfcost={level}")))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = cli.settings_store().await?;
    let settings = store.get().await;

    setup_logging(cli.verbose, cli.quiet, settings.log_level);

    let result = match &cli.command {
        None | Some(Commands::Serve) => serve::run(cli.estimator(&settings)).await,
        Some(Commands::Estimate(args)) => estimate::run(args, &cli, &settings).await,
        Some(Commands::Check) => check::run(&cli, &settings).await,
        Some(Commands::Config(args)) => config::run(args, &cli, &store).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("{}", error_line(&e));
        }
        std::process::exit(exit_code(&e));
    }

    Ok(())
}

/// Maps a failed command to the process exit code.
///
/// Estimate errors carry their own code; anything else exits with 1.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<EstimateError>()
        .map_or(1, EstimateError::exit_code)
}

/// Formats the stderr line for a failed command.
fn error_line(err: &anyhow::Error) -> String {
    format!("{ERROR_PREFIX}{err}")
}

// ============================================================================
// Tests
// ============================================================================

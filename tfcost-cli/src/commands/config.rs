//! Config command - manage configuration.

use anyhow::Result;
use clap::{Args, Subcommand};
use tfcost_store::{SettingsStore, default_config_dir};
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration.
    Show,

    /// Show configuration paths.
    Path,

    /// Set the Infracost binary (name on PATH or a path).
    SetBin {
        /// Binary name or path.
        bin: String,
    },

    /// Go back to `infracost` on PATH.
    UnsetBin,

    /// Set the per-run timeout.
    SetTimeout {
        /// Timeout in seconds.
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        secs: u64,
    },

    /// Set the directory `estimate` uses when none is given.
    SetDir {
        /// Terraform directory.
        directory: String,
    },

    /// Reset to defaults.
    Reset,
}

/// Runs the config command.
pub async fn run(args: &ConfigArgs, cli: &Cli, store: &SettingsStore) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(cli, store).await,
        ConfigAction::Path => show_paths(cli, store),
        ConfigAction::SetBin { bin } => {
            let bin = bin.clone();
            store.update(|s| s.infracost_bin = Some(bin)).await;
            save(store, "Infracost binary updated").await
        }
        ConfigAction::UnsetBin => {
            store.update(|s| s.infracost_bin = None).await;
            save(store, "Infracost binary reset to PATH lookup").await
        }
        ConfigAction::SetTimeout { secs } => {
            let secs = *secs;
            store.update(|s| s.timeout_secs = secs).await;
            save(store, "Timeout updated").await
        }
        ConfigAction::SetDir { directory } => {
            let directory = directory.clone();
            store.update(|s| s.default_directory = directory).await;
            save(store, "Default directory updated").await
        }
        ConfigAction::Reset => {
            store.reset().await;
            save(store, "Configuration reset to defaults").await
        }
    }
}

async fn save(store: &SettingsStore, message: &str) -> Result<()> {
    store.save().await?;
    info!(path = %store.path().display(), "{}", message);
    println!("✓ {message}");
    Ok(())
}

async fn show_config(cli: &Cli, store: &SettingsStore) -> Result<()> {
    let settings = store.get().await;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_settings(&settings));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&settings)?);
        }
    }

    Ok(())
}

fn show_paths(cli: &Cli, store: &SettingsStore) -> Result<()> {
    let config_dir = default_config_dir();
    let settings_path = store.path();

    match cli.format {
        OutputFormat::Text => {
            println!("Configuration Paths");
            println!("{}", "─".repeat(40));
            println!();
            println!("Config dir:    {}", config_dir.display());
            println!("Settings file: {}", settings_path.display());
        }
        OutputFormat::Json => {
            let paths = serde_json::json!({
                "config_dir": config_dir.display().to_string(),
                "settings_file": settings_path.display().to_string(),
            });
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&paths)?);
        }
    }

    Ok(())
}

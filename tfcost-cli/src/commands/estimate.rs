//! Estimate command - one-shot cost summary of a directory.

use anyhow::Result;
use clap::Args;
use tfcost_store::Settings;
use tracing::info;

use crate::output::{EstimateOutput, JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the estimate command.
#[derive(Args, Debug, Default)]
pub struct EstimateArgs {
    /// Terraform directory to estimate (default: settings, then ".").
    pub directory: Option<String>,
}

/// Runs the estimate command.
pub async fn run(args: &EstimateArgs, cli: &Cli, settings: &Settings) -> Result<()> {
    let directory = args
        .directory
        .clone()
        .unwrap_or_else(|| settings.default_directory.clone());

    info!(directory = %directory, "Running estimate");

    let estimator = cli.estimator(settings);
    let result = estimator.estimate(&directory).await;

    match cli.format {
        OutputFormat::Text => {
            let summary = result?;
            println!("{}", TextFormatter::new(!cli.no_color).format_summary(&summary));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&EstimateOutput::new(&directory, &result))?);
            result?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(directory: &str) -> EstimateArgs {
        EstimateArgs {
            directory: Some(directory.to_string()),
        }
    }

    #[tokio::test]
    async fn test_missing_binary_fails_in_text_mode() {
        let cli = Cli::try_parse_from([
            "tfcost",
            "--infracost-bin",
            "definitely_not_infracost_12345",
            "estimate",
        ])
        .unwrap();

        let err = run(&args("."), &cli, &Settings::default()).await.unwrap_err();
        assert_eq!(crate::exit_code(&err), 2);
    }

    #[tokio::test]
    async fn test_missing_binary_fails_in_json_mode() {
        let cli = Cli::try_parse_from([
            "tfcost",
            "--infracost-bin",
            "definitely_not_infracost_12345",
            "--format",
            "json",
            "estimate",
        ])
        .unwrap();

        let err = run(&args("./infra"), &cli, &Settings::default()).await.unwrap_err();
        assert_eq!(crate::exit_code(&err), 2);
    }
}

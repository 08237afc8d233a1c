//! Check command - verify that Infracost is installed and runnable.

use anyhow::Result;
use tfcost_fetch::EstimateError;
use tfcost_store::Settings;

use crate::output::{CheckOutput, JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the check command.
///
/// Exits with the "tool missing" code when the binary cannot be found.
pub async fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    let estimator = cli.estimator(settings);

    let resolved = estimator.resolved_path();
    let version = if resolved.is_some() {
        estimator.version().await
    } else {
        None
    };

    let check = CheckOutput {
        command: estimator.config().command.clone(),
        available: resolved.is_some(),
        path: resolved.map(|p| p.display().to_string()),
        version,
        timeout_secs: estimator.config().timeout.as_secs(),
    };

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_check(&check, cli.verbose));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&check)?);
        }
    }

    if !check.available {
        return Err(EstimateError::NotFound(check.command).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[tokio::test]
    async fn test_missing_binary_exits_with_not_found() {
        let cli = Cli::try_parse_from([
            "tfcost",
            "--infracost-bin",
            "definitely_not_infracost_12345",
            "check",
        ])
        .unwrap();

        let err = run(&cli, &Settings::default()).await.unwrap_err();

        assert_eq!(crate::exit_code(&err), 2);
        assert_eq!(
            crate::error_line(&err),
            "Error: Command not found: definitely_not_infracost_12345"
        );
    }
}

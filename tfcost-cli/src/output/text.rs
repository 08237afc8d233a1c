//! Text output formatting.

use tfcost_core::CostSummary;
use tfcost_store::Settings;

use super::json::CheckOutput;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats a cost summary.
    ///
    /// Always plain: this is the exact text the MCP tool returns.
    pub fn format_summary(&self, summary: &CostSummary) -> String {
        summary.render()
    }

    /// Formats the result of `tfcost check`.
    pub fn format_check(&self, check: &CheckOutput, verbose: bool) -> String {
        let mut lines = Vec::new();

        let status = if check.available {
            let version = check.version.as_deref().unwrap_or("unknown version");
            format!("{} {}", self.green("✓"), version)
        } else {
            self.red("✗ Not found")
        };
        lines.push(format!("{:<15} {}", self.bold("Infracost"), status));

        if verbose || !check.available {
            lines.push(format!("  Command: {}", check.command));
        }
        if verbose {
            if let Some(path) = &check.path {
                lines.push(format!("  Path:    {path}"));
            }
            lines.push(format!("  Timeout: {}s", check.timeout_secs));
        }
        if !check.available {
            lines.push(self.dim(
                "  Install Infracost or set --infracost-bin / TFCOST_INFRACOST_BIN",
            ));
        }

        lines.join("\n")
    }

    /// Formats the current settings.
    pub fn format_settings(&self, settings: &Settings) -> String {
        let bin = settings
            .infracost_bin
            .as_deref()
            .unwrap_or("infracost (PATH)");

        [
            self.bold("tfcost Configuration"),
            "─".repeat(40),
            String::new(),
            format!("Infracost binary:  {bin}"),
            format!("Timeout:           {}s", settings.timeout_secs),
            format!("Default directory: {}", settings.default_directory),
            format!("Log level:         {}", settings.log_level),
        ]
        .join("\n")
    }

    // ========================================================================
    // Color Helpers
    // ========================================================================

    fn paint(&self, color: &str, s: &str) -> String {
        if self.use_colors {
            format!("{color}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }

    fn dim(&self, s: &str) -> String {
        self.paint(DIM, s)
    }

    fn green(&self, s: &str) -> String {
        self.paint(GREEN, s)
    }

    fn red(&self, s: &str) -> String {
        self.paint(RED, s)
    }
}

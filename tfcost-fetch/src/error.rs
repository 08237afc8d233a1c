//! Fetch error types.

use std::time::Duration;
use thiserror::Error;
use tfcost_core::CoreError;

// ============================================================================
// Process Error
// ============================================================================

/// Error type for process operations.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Command not found.
    #[error("Command not found: {0}")]
    NotFound(String),

    /// Command execution failed.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Command timed out.
    #[error("{cmd} timed out after {timeout:?}")]
    Timeout {
        /// Command that was running.
        cmd: String,
        /// Timeout that elapsed.
        timeout: Duration,
    },

    /// Non-zero exit code.
    #[error("Command exited with code {code}: {stderr}")]
    NonZeroExit {
        /// Exit code from the process.
        code: i32,
        /// Standard error output.
        stderr: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Estimate Error
// ============================================================================

/// Error type for a single cost estimate.
///
/// The display text of each variant is what callers see after `Error: `.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// The tool ran and exited non-zero. Displays the trimmed stderr only.
    #[error("{stderr}")]
    ToolFailed {
        /// Exit code from the tool.
        code: i32,
        /// Trimmed standard error output.
        stderr: String,
    },

    /// The tool binary could not be located.
    #[error("Command not found: {0}")]
    NotFound(String),

    /// The tool did not finish in time and was killed.
    #[error("{cmd} timed out after {timeout:?}")]
    Timeout {
        /// Command that was running.
        cmd: String,
        /// Timeout that elapsed.
        timeout: Duration,
    },

    /// The tool's output was not a valid report.
    #[error(transparent)]
    Report(#[from] CoreError),

    /// Any other process failure (spawn, IO).
    #[error(transparent)]
    Process(ProcessError),
}

impl From<ProcessError> for EstimateError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::NotFound(cmd) => EstimateError::NotFound(cmd),
            ProcessError::Timeout { cmd, timeout } => EstimateError::Timeout { cmd, timeout },
            ProcessError::NonZeroExit { code, stderr } => EstimateError::ToolFailed {
                code,
                stderr: stderr.trim().to_string(),
            },
            other => EstimateError::Process(other),
        }
    }
}

impl EstimateError {
    /// Returns the CLI exit code for this error.
    ///
    /// 2 = tool missing, 3 = bad report, 4 = timeout, 1 = anything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            EstimateError::NotFound(_) => 2,
            EstimateError::Report(_) => 3,
            EstimateError::Timeout { .. } => 4,
            EstimateError::ToolFailed { .. } | EstimateError::Process(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_failure_displays_stderr_only() {
        let err = EstimateError::from(ProcessError::NonZeroExit {
            code: 1,
            stderr: "no terraform files found\n".to_string(),
        });
        assert_eq!(err.to_string(), "no terraform files found");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_timeout_message() {
        let err = EstimateError::from(ProcessError::Timeout {
            cmd: "infracost".to_string(),
            timeout: Duration::from_secs(120),
        });
        assert_eq!(err.to_string(), "infracost timed out after 120s");
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_not_found_maps_through() {
        let err = EstimateError::from(ProcessError::NotFound("infracost".to_string()));
        assert!(matches!(err, EstimateError::NotFound(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_report_error_is_transparent() {
        let core = tfcost_core::CostReport::from_json("").unwrap_err();
        let expected = core.to_string();
        let err = EstimateError::from(core);
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.exit_code(), 3);
    }
}

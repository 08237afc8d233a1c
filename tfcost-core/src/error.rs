//! Core error types for tfcost.

use thiserror::Error;

/// Core error type for report decoding.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The report was not valid JSON or did not match the expected shape.
    ///
    /// The message is passed through unchanged so the tool boundary can
    /// surface it as `Error: <message>`.
    #[error("{0}")]
    InvalidReport(#[from] serde_json::Error),
}

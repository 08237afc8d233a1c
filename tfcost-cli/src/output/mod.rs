//! Output formatting for CLI.

mod json;
mod text;

pub use json::{CheckOutput, EstimateOutput, JsonFormatter};
pub use text::TextFormatter;

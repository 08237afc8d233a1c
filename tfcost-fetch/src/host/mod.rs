//! Host APIs for tfcost.
//!
//! - [`process`] - Subprocess execution for CLI tools

pub mod process;

pub use process::{ProcessOutput, ProcessRunner};

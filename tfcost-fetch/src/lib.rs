// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # tfcost Fetch
//!
//! Runs the Infracost CLI and turns its report into a [`CostSummary`].
//!
//! ## Host APIs
//!
//! The [`host`] module provides abstractions for system interactions:
//!
//! - [`host::process`] - Subprocess execution with PATH lookup and timeouts
//!
//! ## Estimator
//!
//! - [`InfracostEstimator`] - Runs `infracost breakdown` and summarizes it
//! - [`EstimatorConfig`] - Binary to run and per-call timeout
//!
//! ## Example
//!
//! ```ignore
//! use tfcost_fetch::{EstimatorConfig, InfracostEstimator};
//!
//! let estimator = InfracostEstimator::new(EstimatorConfig::default());
//!
//! // Never fails: errors come back as "Error: <message>"
//! let text = estimator.summarize("./infra").await;
//! println!("{text}");
//! ```
//!
//! [`CostSummary`]: tfcost_core::CostSummary

pub mod error;
pub mod estimator;
pub mod host;

// Errors
pub use error::{EstimateError, ProcessError};

// Host APIs
pub use host::process::{ProcessOutput, ProcessRunner};

// Estimator
pub use estimator::{
    DEFAULT_COMMAND, DEFAULT_TIMEOUT_SECS, ERROR_PREFIX, EstimatorConfig, InfracostEstimator,
};

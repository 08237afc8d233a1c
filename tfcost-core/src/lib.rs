// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # tfcost Core
//!
//! Core types for turning an Infracost `breakdown` report into a short,
//! human-readable cost summary.
//!
//! This crate does no I/O. It provides:
//!
//! - The report model decoded from `infracost breakdown --format json`
//! - The derived summary (total plus the most expensive resources)
//! - Error types
//!
//! ## Key Types
//!
//! ### Report Types
//! - [`CostReport`] - Top-level Infracost JSON report
//! - [`Project`] - One project in the report
//! - [`Breakdown`] - Per-project resource breakdown
//! - [`ReportResource`] - A single priced resource as reported
//!
//! ### Summary Types
//! - [`ResourceCost`] - A resource with a strictly positive monthly cost
//! - [`CostSummary`] - Total, currency and the top resources by cost
//!
//! ## Example
//!
//! ```
//! use tfcost_core::{CostReport, CostSummary};
//!
//! let json = r#"{"totalMonthlyCost":"30.00","currency":"USD","projects":[
//!     {"breakdown":{"resources":[{"name":"aws_instance.web","monthlyCost":"30.00"}]}}
//! ]}"#;
//!
//! let report = CostReport::from_json(json).unwrap();
//! let summary = CostSummary::from_report(&report);
//! assert!(summary.render().ends_with("aws_instance.web: $30.00"));
//! ```

pub mod error;
pub mod models;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Report types
    Breakdown,
    CostReport,
    Project,
    ReportResource,
    DEFAULT_CURRENCY,
    DEFAULT_TOTAL,
    // Summary types
    CostSummary,
    ResourceCost,
    SEPARATOR_WIDTH,
    TOP_RESOURCES,
    UNNAMED_RESOURCE,
};

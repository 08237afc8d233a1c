//! Domain models for tfcost.
//!
//! ## Submodules
//!
//! - [`report`] - The Infracost JSON report as emitted by `infracost breakdown`
//! - [`summary`] - The condensed summary derived from a report

mod report;
mod summary;

pub use report::{Breakdown, CostReport, DEFAULT_CURRENCY, DEFAULT_TOTAL, Project, ReportResource};
pub use summary::{CostSummary, ResourceCost, SEPARATOR_WIDTH, TOP_RESOURCES, UNNAMED_RESOURCE};

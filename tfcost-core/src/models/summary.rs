//! Cost summary types.
//!
//! This module contains the condensed view of a report:
//! - [`ResourceCost`] - A resource with a strictly positive monthly cost
//! - [`CostSummary`] - Total, currency and the most expensive resources

use std::fmt;

use serde::{Deserialize, Serialize};

use super::report::CostReport;

/// Maximum number of resources listed in a summary.
pub const TOP_RESOURCES: usize = 5;

/// Width of the dashed line under the summary header.
pub const SEPARATOR_WIDTH: usize = 30;

/// Name shown for resources the report left unnamed.
pub const UNNAMED_RESOURCE: &str = "(unnamed)";

// ============================================================================
// Resource Cost
// ============================================================================

/// A resource and its monthly cost. Only built for costs above zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceCost {
    /// Resource address.
    pub name: String,
    /// Monthly cost in the report's currency.
    pub cost: f64,
}

impl ResourceCost {
    /// Creates a new resource cost.
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }

    /// Formats the summary line, e.g. `aws_instance.web: $30.00`.
    ///
    /// The cost is rounded to two decimals from its exact binary value,
    /// so `12.345` prints as `12.35` and `12.344` as `12.34`.
    pub fn line(&self) -> String {
        format!("{}: ${:.2}", self.name, self.cost)
    }
}

// ============================================================================
// Cost Summary
// ============================================================================

/// Condensed cost summary of one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    /// Total monthly cost as reported.
    pub total: String,
    /// Currency code.
    pub currency: String,
    /// Most expensive resources, at most [`TOP_RESOURCES`], descending.
    pub top_resources: Vec<ResourceCost>,
    /// Number of resources with a positive cost before truncation.
    pub priced_resources: usize,
}

impl CostSummary {
    /// Builds a summary from a decoded report.
    pub fn from_report(report: &CostReport) -> Self {
        let mut top_resources = report.priced_resources();
        let priced_resources = top_resources.len();
        top_resources.truncate(TOP_RESOURCES);

        Self {
            total: report.total().to_string(),
            currency: report.currency().to_string(),
            top_resources,
            priced_resources,
        }
    }

    /// Returns the header line.
    pub fn header(&self) -> String {
        format!("💰 EST. COST: ${} {}/mo", self.total, self.currency)
    }

    /// Returns true if some priced resources were left out.
    pub fn is_truncated(&self) -> bool {
        self.priced_resources > self.top_resources.len()
    }

    /// Renders the summary text: header, separator, one line per resource.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.top_resources.len() + 2);
        lines.push(self.header());
        lines.push("-".repeat(SEPARATOR_WIDTH));
        lines.extend(self.top_resources.iter().map(ResourceCost::line));
        lines.join("\n")
    }
}

impl fmt::Display for CostSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ============================================================================
// Tests
// ============================================================================

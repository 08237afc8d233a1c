//! Infracost report types.
//!
//! Only the fields needed for a summary are modeled; everything else in the
//! report is ignored. Decoding is lenient about `null` and missing values
//! but strict about wrong types:
//!
//! - `monthlyCost` may be a number, a numeric string, `""`, `null` or absent
//!   (the last three mean zero)
//! - `totalMonthlyCost` may be a string (kept verbatim) or a number
//! - `projects`, `breakdown` and `resources` may be absent, but not `null`
//! - the document, each project, breakdown and resource must be JSON objects

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::summary::{ResourceCost, UNNAMED_RESOURCE};
use crate::error::CoreError;

/// Total used when the report has no `totalMonthlyCost`.
pub const DEFAULT_TOTAL: &str = "0";

/// Currency used when the report has no `currency`.
pub const DEFAULT_CURRENCY: &str = "USD";

// ============================================================================
// Cost Report
// ============================================================================

/// Top-level report produced by `infracost breakdown --format json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostReport {
    /// Total monthly cost, as text. `None` if absent or `null`.
    #[serde(default, deserialize_with = "total_cost")]
    pub total_monthly_cost: Option<String>,
    /// Currency code (e.g. "USD").
    #[serde(default)]
    pub currency: Option<String>,
    /// Projects in the report.
    #[serde(default, deserialize_with = "objects")]
    pub projects: Vec<Project>,
}

impl CostReport {
    /// Decodes a report from the tool's standard output.
    ///
    /// An empty, malformed or non-object document is an error; there is no
    /// partial result.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let map: Map<String, Value> = serde_json::from_str(json)?;
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    /// Returns the total monthly cost, defaulting to `"0"`.
    pub fn total(&self) -> &str {
        self.total_monthly_cost.as_deref().unwrap_or(DEFAULT_TOTAL)
    }

    /// Returns the currency, defaulting to `"USD"`.
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    /// Iterates over every resource of every project, in report order.
    pub fn resources(&self) -> impl Iterator<Item = &ReportResource> {
        self.projects
            .iter()
            .flat_map(|project| project.breakdown.resources.iter())
    }

    /// Returns all resources with a strictly positive cost, most expensive
    /// first. Equal costs keep their report order.
    pub fn priced_resources(&self) -> Vec<ResourceCost> {
        let mut priced: Vec<ResourceCost> = self
            .resources()
            .filter(|r| r.is_priced())
            .map(ResourceCost::from)
            .collect();

        // sort_by is stable
        priced.sort_by(|a, b| b.cost.total_cmp(&a.cost));
        priced
    }
}

// ============================================================================
// Project / Breakdown / Resource
// ============================================================================

/// One project (usually one Terraform root module) in the report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// Cost breakdown for this project.
    #[serde(default, deserialize_with = "object")]
    pub breakdown: Breakdown,
}

/// Resource breakdown of a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Breakdown {
    /// Priced resources.
    #[serde(default, deserialize_with = "objects")]
    pub resources: Vec<ReportResource>,
}

/// A single resource as reported by the tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResource {
    /// Resource address, e.g. `aws_instance.web`.
    #[serde(default)]
    pub name: Option<String>,
    /// Monthly cost. Missing, `null` and `""` decode as zero.
    #[serde(default, deserialize_with = "monthly_cost")]
    pub monthly_cost: f64,
}

impl ReportResource {
    /// Returns true if the resource costs something. `NaN` never counts.
    pub fn is_priced(&self) -> bool {
        self.monthly_cost > 0.0
    }

    /// Returns the resource name, or a placeholder if the report omitted it.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_RESOURCE)
    }
}

impl From<&ReportResource> for ResourceCost {
    fn from(resource: &ReportResource) -> Self {
        ResourceCost::new(resource.display_name(), resource.monthly_cost)
    }
}

// ============================================================================
// Field Decoders
// ============================================================================

// Derived struct impls also accept JSON arrays; going through a map rejects them.
fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let map = Map::<String, Value>::deserialize(deserializer)?;
    serde_json::from_value(Value::Object(map)).map_err(D::Error::custom)
}

fn objects<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Vec::<Map<String, Value>>::deserialize(deserializer)?
        .into_iter()
        .map(|map| serde_json::from_value(Value::Object(map)).map_err(D::Error::custom))
        .collect()
}

fn total_cost<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "invalid totalMonthlyCost: expected a string or number, found {other}"
        ))),
    }
}

fn monthly_cost<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("invalid monthlyCost: {n} is not a float"))),
        Some(Value::String(s)) => parse_cost(&s).map_err(D::Error::custom),
        Some(other) => Err(D::Error::custom(format!(
            "invalid monthlyCost: expected a number or numeric string, found {other}"
        ))),
    }
}

/// Parses a numeric cost string. Blank means zero.
fn parse_cost(s: &str) -> Result<f64, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| format!("could not convert monthlyCost to a number: {s:?}"))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn report(resources: &str) -> CostReport {
        let json = format!(
            r#"{{"totalMonthlyCost":"1","currency":"USD","projects":[{{"breakdown":{{"resources":{resources}}}}}]}}"#
        );
        CostReport::from_json(&json).unwrap()
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let report = CostReport::from_json("{}").unwrap();
        assert_eq!(report.total(), "0");
        assert_eq!(report.currency(), "USD");
        assert_eq!(report.resources().count(), 0);
    }

    #[test]
    fn test_null_total_and_currency_use_defaults() {
        let json = r#"{"totalMonthlyCost":null,"currency":null}"#;
        let report = CostReport::from_json(json).unwrap();
        assert_eq!(report.total(), "0");
        assert_eq!(report.currency(), "USD");
        assert!(report.projects.is_empty());
    }

    #[test]
    fn test_numeric_total_is_rendered_as_number() {
        let report = CostReport::from_json(r#"{"totalMonthlyCost":42.5}"#).unwrap();
        assert_eq!(report.total(), "42.5");
    }

    #[test]
    fn test_string_total_is_kept_verbatim() {
        let report = CostReport::from_json(r#"{"totalMonthlyCost":"42.50"}"#).unwrap();
        assert_eq!(report.total(), "42.50");
    }

    #[test]
    fn test_total_wrong_type_fails() {
        let result = CostReport::from_json(r#"{"totalMonthlyCost":[1]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_monthly_cost_variants() {
        let report = report(
            r#"[
                {"name":"a","monthlyCost":"12.5"},
                {"name":"b","monthlyCost":3},
                {"name":"c","monthlyCost":null},
                {"name":"d"},
                {"name":"e","monthlyCost":""},
                {"name":"f","monthlyCost":" 7.25 "}
            ]"#,
        );
        let costs: Vec<f64> = report.resources().map(|r| r.monthly_cost).collect();
        assert_eq!(costs, vec![12.5, 3.0, 0.0, 0.0, 0.0, 7.25]);
    }

    #[test]
    fn test_non_numeric_cost_fails_whole_report() {
        let json = r#"{"projects":[{"breakdown":{"resources":[{"name":"a","monthlyCost":"abc"}]}}]}"#;
        let err = CostReport::from_json(json).unwrap_err();
        assert!(err.to_string().contains("monthlyCost"));
    }

    #[test]
    fn test_bool_cost_fails() {
        let json = r#"{"projects":[{"breakdown":{"resources":[{"name":"a","monthlyCost":true}]}}]}"#;
        assert!(CostReport::from_json(json).is_err());
    }

    #[test]
    fn test_absent_breakdown_and_resources_are_empty() {
        let json = r#"{"projects":[{},{"breakdown":{}}]}"#;
        let report = CostReport::from_json(json).unwrap();
        assert_eq!(report.projects.len(), 2);
        assert_eq!(report.resources().count(), 0);
    }

    #[test]
    fn test_null_collections_fail() {
        for json in [
            r#"{"projects":null}"#,
            r#"{"projects":[{"breakdown":null}]}"#,
            r#"{"projects":[{"breakdown":{"resources":null}}]}"#,
        ] {
            assert!(CostReport::from_json(json).is_err(), "{json} should fail");
        }
    }

    #[test]
    fn test_arrays_in_place_of_objects_fail() {
        for json in [
            "[]",
            "[null,null,null]",
            r#"{"projects":[[null]]}"#,
            r#"{"projects":[{"breakdown":[[]]}]}"#,
            r#"{"projects":[{"breakdown":{"resources":[["a","1"]]}}]}"#,
            r#"{"projects":[{"breakdown":{"resources":[null]}}]}"#,
        ] {
            assert!(CostReport::from_json(json).is_err(), "{json} should fail");
        }
    }

    #[test]
    fn test_priced_resources_filters_and_sorts() {
        let report = report(
            r#"[
                {"name":"cheap","monthlyCost":"1.00"},
                {"name":"free","monthlyCost":"0"},
                {"name":"pricey","monthlyCost":"99.99"},
                {"name":"unpriced","monthlyCost":null},
                {"name":"mid","monthlyCost":"10"}
            ]"#,
        );
        let names: Vec<String> = report.priced_resources().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["pricey", "mid", "cheap"]);
    }

    #[test]
    fn test_priced_resources_sort_is_stable() {
        let report = report(
            r#"[
                {"name":"first","monthlyCost":"5"},
                {"name":"big","monthlyCost":"8"},
                {"name":"second","monthlyCost":"5"},
                {"name":"third","monthlyCost":5}
            ]"#,
        );
        let names: Vec<String> = report.priced_resources().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["big", "first", "second", "third"]);
    }

    #[test]
    fn test_resources_span_projects() {
        let json = r#"{"projects":[
            {"breakdown":{"resources":[{"name":"a","monthlyCost":"1"}]}},
            {"breakdown":{"resources":[{"name":"b","monthlyCost":"2"}]}}
        ]}"#;
        let report = CostReport::from_json(json).unwrap();
        let names: Vec<&str> = report.resources().map(ReportResource::display_name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_nan_cost_is_not_priced() {
        let resource = ReportResource {
            name: Some("weird".to_string()),
            monthly_cost: parse_cost("NaN").unwrap(),
        };
        assert!(!resource.is_priced());
    }

    #[test]
    fn test_missing_name_uses_placeholder() {
        let report = report(r#"[{"monthlyCost":"3"}]"#);
        let priced = report.priced_resources();
        assert_eq!(priced[0].name, UNNAMED_RESOURCE);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"version":"0.2","timeGenerated":"2024-01-01T00:00:00Z",
            "totalHourlyCost":"0.05","projects":[{"name":"main","metadata":{},
            "breakdown":{"totalMonthlyCost":"1","resources":[
                {"name":"a","resourceType":"aws_instance","hourlyCost":"0.01","monthlyCost":"1"}
            ]}}]}"#;
        let report = CostReport::from_json(json).unwrap();
        assert_eq!(report.priced_resources().len(), 1);
    }
}

//! Integration tests for report decoding and summary rendering.

use tfcost_core::{CostReport, CostSummary, TOP_RESOURCES};

fn summarize(json: &str) -> String {
    let report = CostReport::from_json(json).unwrap();
    CostSummary::from_report(&report).render()
}

fn resource_lines(rendered: &str) -> Vec<&str> {
    rendered.lines().skip(2).collect()
}

fn line_cost(line: &str) -> f64 {
    line.rsplit_once(": $").unwrap().1.parse().unwrap()
}

#[test]
fn test_two_resource_report() {
    let json = r#"{"totalMonthlyCost":"42.50","currency":"USD","projects":[{"breakdown":{"resources":[{"name":"aws_instance.web","monthlyCost":"30.00"},{"name":"aws_s3_bucket.logs","monthlyCost":"12.50"}]}}]}"#;

    let expected = "💰 EST. COST: $42.50 USD/mo\n\
                    ------------------------------\n\
                    aws_instance.web: $30.00\n\
                    aws_s3_bucket.logs: $12.50";

    assert_eq!(summarize(json), expected);
}

#[test]
fn test_more_than_five_resources_keeps_top_five() {
    let json = r#"{"totalMonthlyCost":"321","currency":"USD","projects":[
        {"breakdown":{"resources":[
            {"name":"aws_instance.a","monthlyCost":"10"},
            {"name":"aws_instance.b","monthlyCost":"80"},
            {"name":"aws_instance.c","monthlyCost":"5"}
        ]}},
        {"breakdown":{"resources":[
            {"name":"aws_db_instance.d","monthlyCost":"120"},
            {"name":"aws_nat_gateway.e","monthlyCost":"32.85"},
            {"name":"aws_lb.f","monthlyCost":"18.40"},
            {"name":"aws_s3_bucket.g","monthlyCost":"0.23"}
        ]}}
    ]}"#;

    let rendered = summarize(json);
    let lines = resource_lines(&rendered);

    assert_eq!(
        lines,
        vec![
            "aws_db_instance.d: $120.00",
            "aws_instance.b: $80.00",
            "aws_nat_gateway.e: $32.85",
            "aws_lb.f: $18.40",
            "aws_instance.a: $10.00",
        ]
    );
}

#[test]
fn test_output_is_bounded_and_non_increasing() {
    let resources: Vec<String> = (0..40)
        .map(|i| {
            let cost = f64::from((i * 37) % 23) * 1.5;
            format!(r#"{{"name":"r{i}","monthlyCost":"{cost}"}}"#)
        })
        .collect();
    let json = format!(
        r#"{{"projects":[{{"breakdown":{{"resources":[{}]}}}}]}}"#,
        resources.join(",")
    );

    let rendered = summarize(&json);
    let costs: Vec<f64> = resource_lines(&rendered).into_iter().map(line_cost).collect();

    assert!(costs.len() <= TOP_RESOURCES);
    assert!(!costs.is_empty());
    assert!(costs.windows(2).all(|w| w[0] >= w[1]));
    assert!(costs.iter().all(|c| *c > 0.0));
}

#[test]
fn test_all_zero_costs_render_header_only() {
    let json = r#"{"totalMonthlyCost":"0","currency":"USD","projects":[{"breakdown":{"resources":[
        {"name":"aws_iam_role.a","monthlyCost":"0"},
        {"name":"aws_iam_policy.b","monthlyCost":null},
        {"name":"aws_vpc.c"}
    ]}}]}"#;

    let rendered = summarize(json);
    assert_eq!(rendered.lines().count(), 2);
    assert!(resource_lines(&rendered).is_empty());
}

#[test]
fn test_zero_and_null_resources_never_listed() {
    let json = r#"{"projects":[{"breakdown":{"resources":[
        {"name":"free.zero","monthlyCost":"0"},
        {"name":"paid.one","monthlyCost":"1.5"},
        {"name":"free.null","monthlyCost":null},
        {"name":"free.absent"}
    ]}}]}"#;

    let rendered = summarize(json);
    assert!(!rendered.contains("free."));
    assert!(rendered.contains("paid.one: $1.50"));
}

#[test]
fn test_empty_document_is_an_error() {
    assert!(CostReport::from_json("").is_err());
}

#[test]
fn test_non_object_document_is_an_error() {
    assert!(CostReport::from_json("[]").is_err());
    assert!(CostReport::from_json("[null,null,null]").is_err());
    assert!(CostReport::from_json("not json").is_err());
}

#[test]
fn test_nested_non_objects_are_errors() {
    assert!(CostReport::from_json(r#"{"projects":[[null]]}"#).is_err());
    assert!(CostReport::from_json(r#"{"projects":null}"#).is_err());
    assert!(CostReport::from_json(r#"{"projects":[{"breakdown":null}]}"#).is_err());
}

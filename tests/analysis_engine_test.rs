//! Integration tests for the rule-based analysis engine
//!
//! Pins the externally observable behavior: scoring arithmetic, issue
//! tables, rewrite rules, and the JSON wire shape of the results.

use reqd::models::{IssueCategory, IssueSeverity};
use reqd::MockAnalysisEngine;

#[test]
fn test_clean_measurable_text_is_issue_free() {
    let engine = MockAnalysisEngine::new();
    let result = engine.analyze("The login endpoint must respond within 2 seconds");

    assert_eq!(result.overall_score, 75);
    assert!(result.issues.is_empty());
}

#[test]
fn test_reference_example_text() {
    let engine = MockAnalysisEngine::new();
    let result = engine.analyze("The system should be user-friendly and fast");

    assert_eq!(result.overall_score, 25);
    assert_eq!(result.issues.len(), 4);

    let categories: Vec<IssueCategory> = result.issues.iter().map(|i| i.category).collect();
    assert_eq!(
        categories,
        vec![
            IssueCategory::Ambiguity,
            IssueCategory::Completeness,
            IssueCategory::Verifiability,
            IssueCategory::Consistency,
        ]
    );

    // Multiple ambiguous matches collapse into one issue, vocabulary order
    assert_eq!(result.issues[0].problematic_text, "user-friendly, fast");
    assert_eq!(result.issues[0].severity, IssueSeverity::Major);
}

#[test]
fn test_empty_string_degrades_to_base_score() {
    let engine = MockAnalysisEngine::new();
    let result = engine.analyze("");

    assert_eq!(result.overall_score, 75);
    assert!(result.issues.is_empty());
}

#[test]
fn test_score_stays_within_bounds_for_varied_inputs() {
    let engine = MockAnalysisEngine::new();
    let inputs = [
        "",
        "x",
        "The system should be user-friendly and fast",
        "Background jobs could be rescheduled whenever the operator deems it reasonable",
        "The API must respond within 2 seconds for 95% of requests",
    ];

    for input in inputs {
        let score = engine.analyze(input).overall_score;
        assert!((20..=100).contains(&score), "score {} out of bounds for {:?}", score, input);
    }
}

#[test]
fn test_analysis_is_reproducible() {
    let engine = MockAnalysisEngine::new();
    let text = "Reports may be generated slowly but should stay accurate";

    let first = engine.analyze(text);
    let second = engine.analyze(text);

    assert_eq!(first.overall_score, second.overall_score);
    assert_eq!(first.issues, second.issues);
}

#[test]
fn test_enhancement_contract() {
    let engine = MockAnalysisEngine::new();
    let result = engine.enhance("The checkout should be user-friendly");

    assert_eq!(result.enhancements.len(), 2);
    assert_eq!(result.enhancements[0].quality_score, 85);
    assert_eq!(result.enhancements[1].quality_score, 78);
    assert_eq!(result.recommended_index, 0);
}

#[test]
fn test_results_serialize_with_wire_field_names() {
    let engine = MockAnalysisEngine::new();

    let analysis = serde_json::to_value(engine.analyze("The system should be fast")).unwrap();
    assert!(analysis.get("overallScore").is_some());
    assert!(analysis.get("analyzedAt").is_some());
    let issue = &analysis["issues"][0];
    assert!(issue.get("type").is_some());
    assert!(issue.get("problematicText").is_some());

    let enhancement = serde_json::to_value(engine.enhance("The system should be fast")).unwrap();
    assert!(enhancement.get("recommendedIndex").is_some());
    assert!(enhancement["enhancements"][0].get("qualityScore").is_some());
}

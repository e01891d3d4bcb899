//! Mapping detected signals to structured issues

use crate::models::{Issue, IssueCategory, IssueSeverity, Signal, SignalKind};

/// Build one issue per detected signal category.
///
/// Output order is fixed (ambiguity, completeness, verifiability,
/// consistency), restricted to the categories actually present.
pub fn build(signals: &[Signal]) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let Some(signal) = find(signals, SignalKind::AmbiguousTerm) {
        issues.push(Issue {
            category: IssueCategory::Ambiguity,
            severity: IssueSeverity::Major,
            description: format!(
                "Contains ambiguous terms that are not measurable: {}",
                signal.matched_span
            ),
            problematic_text: signal.matched_span.clone(),
            suggestion: "Replace with specific, measurable criteria (e.g., response time < 2 \
                         seconds, 95% user success rate)"
                .to_string(),
        });
    }

    if let Some(signal) = find(signals, SignalKind::WeakModal) {
        issues.push(Issue {
            category: IssueCategory::Completeness,
            severity: IssueSeverity::Minor,
            description: format!(
                "Uses weak modal verbs instead of definitive requirements language: {}",
                signal.matched_span
            ),
            problematic_text: signal.matched_span.clone(),
            suggestion: "Use definitive language: 'shall', 'must', or 'will' for mandatory \
                         requirements"
                .to_string(),
        });
    }

    if let Some(signal) = find(signals, SignalKind::MissingMeasurableCriterion) {
        issues.push(Issue {
            category: IssueCategory::Verifiability,
            severity: IssueSeverity::Major,
            description: "Lacks quantifiable, measurable criteria for verification".to_string(),
            problematic_text: signal.matched_span.clone(),
            suggestion: "Add specific metrics: timeframes, percentages, counts, or size limits \
                         that can be objectively measured"
                .to_string(),
        });
    }

    if let Some(signal) = find(signals, SignalKind::PassiveVoice) {
        issues.push(Issue {
            category: IssueCategory::Consistency,
            severity: IssueSeverity::Minor,
            description: "May contain passive voice constructions".to_string(),
            problematic_text: signal.matched_span.clone(),
            suggestion: "Use active voice: specify who performs the action".to_string(),
        });
    }

    issues
}

fn find(signals: &[Signal], kind: SignalKind) -> Option<&Signal> {
    signals.iter().find(|s| s.kind == kind)
}

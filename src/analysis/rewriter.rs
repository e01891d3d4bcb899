//! Rule-based requirement rewriting

use crate::models::{EnhancementCandidate, EnhancementResult};

/// Ordered replacements for the comprehensive rewrite
const COMPREHENSIVE_RULES: &[(&str, &str)] = &[
    ("should", "shall"),
    ("may", "shall"),
    ("might", "shall"),
    ("user-friendly", "intuitive with 95% user task completion rate"),
    ("fast", "within 2 seconds"),
    ("efficient", "with 99% accuracy"),
];

/// Ordered replacements for the moderate rewrite
const MODERATE_RULES: &[(&str, &str)] = &[
    ("should", "must"),
    ("user-friendly", "accessible to 90% of target users"),
];

const COMPREHENSIVE_SCORE: i32 = 85;
const MODERATE_SCORE: i32 = 78;

/// Produce ranked rewrite candidates for a requirement text.
///
/// Always returns exactly two candidates; the first is the recommended one.
pub fn enhance(text: &str) -> EnhancementResult {
    EnhancementResult {
        enhancements: vec![comprehensive(text), moderate(text)],
        recommended_index: 0,
    }
}

fn comprehensive(text: &str) -> EnhancementCandidate {
    let mut rewritten = apply_rules(text, COMPREHENSIVE_RULES);
    if !has_binding_language(&rewritten) {
        rewritten = format!("The system shall {}", text.to_lowercase());
    }

    EnhancementCandidate {
        text: rewritten,
        changes: vec![
            "Replaced weak modal verbs with 'shall'".to_string(),
            "Substituted ambiguous terms with measurable criteria".to_string(),
            "Enforced mandatory requirements language".to_string(),
        ],
        improvements: vec![
            "Uses definitive requirements language".to_string(),
            "Includes quantifiable acceptance criteria".to_string(),
            "Objectively verifiable".to_string(),
        ],
        quality_score: COMPREHENSIVE_SCORE,
        rationale: "Comprehensive rewrite enforcing mandatory language and measurable criteria"
            .to_string(),
    }
}

fn moderate(text: &str) -> EnhancementCandidate {
    let mut rewritten = apply_rules(text, MODERATE_RULES);
    if !has_binding_language(&rewritten) && !rewritten.starts_with("The") {
        rewritten = format!("The application must {}", text.to_lowercase());
    }

    EnhancementCandidate {
        text: rewritten,
        changes: vec![
            "Replaced 'should' with 'must'".to_string(),
            "Clarified ambiguous usability terms".to_string(),
        ],
        improvements: vec![
            "Stronger modal language".to_string(),
            "More specific acceptance target".to_string(),
        ],
        quality_score: MODERATE_SCORE,
        rationale: "Minimal edit keeping the original structure while strengthening the language"
            .to_string(),
    }
}

fn apply_rules(text: &str, rules: &[(&str, &str)]) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

fn has_binding_language(text: &str) -> bool {
    text.contains("shall") || text.contains("must")
}

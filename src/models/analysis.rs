use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lexical signal categories detected in requirement text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalKind {
    /// Vague wording with no measurable meaning
    AmbiguousTerm,
    /// Non-binding modal verbs ("should", "may", ...)
    WeakModal,
    /// Passive constructions hiding the acting subject
    PassiveVoice,
    /// No number or unit anywhere in a non-trivial text
    MissingMeasurableCriterion,
}

/// A detected lexical condition in requirement text
///
/// Transient: recomputed on every analysis call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    /// Which check fired
    pub kind: SignalKind,
    /// Comma-joined list of the spans that triggered the check
    pub matched_span: String,
}

impl Signal {
    pub fn new(kind: SignalKind, matched_span: impl Into<String>) -> Self {
        Self {
            kind,
            matched_span: matched_span.into(),
        }
    }
}

/// Severity of a quality issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Blocks approval, must be fixed
    Critical,
    /// Should be fixed before the requirement is implemented
    Major,
    /// Stylistic, nice to fix
    Minor,
}

impl IssueSeverity {
    /// Get display symbol for severity
    pub fn symbol(&self) -> &'static str {
        match self {
            IssueSeverity::Critical => "🔴",
            IssueSeverity::Major => "🟡",
            IssueSeverity::Minor => "🔵",
        }
    }

    /// Get display name for severity
    pub fn name(&self) -> &'static str {
        match self {
            IssueSeverity::Critical => "CRITICAL",
            IssueSeverity::Major => "MAJOR",
            IssueSeverity::Minor => "MINOR",
        }
    }
}

/// Quality problem category, one per signal kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    /// Vague, unmeasurable wording
    Ambiguity,
    /// Weak modal verbs instead of binding language
    Completeness,
    /// Nothing to objectively verify against
    Verifiability,
    /// Passive voice obscuring the actor
    Consistency,
}

impl IssueCategory {
    /// Get display name for category
    pub fn name(&self) -> &'static str {
        match self {
            IssueCategory::Ambiguity => "Ambiguity",
            IssueCategory::Completeness => "Completeness",
            IssueCategory::Verifiability => "Verifiability",
            IssueCategory::Consistency => "Consistency",
        }
    }
}

/// A structured, user-facing description of one quality problem category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(rename = "type")]
    pub category: IssueCategory,
    pub severity: IssueSeverity,
    pub description: String,
    /// The offending span(s), comma-joined when a category matched more than once
    pub problematic_text: String,
    pub suggestion: String,
}

/// Result of analyzing one requirement text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Bounded quality score in [20, 100]
    pub overall_score: i32,
    /// Detected issues in detection rule order
    pub issues: Vec<Issue>,
    /// When the analysis ran (UTC)
    pub analyzed_at: DateTime<Utc>,
}

/// One rewritten version of a requirement text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementCandidate {
    /// The rewritten requirement text
    pub text: String,
    /// What the rewrite changed
    pub changes: Vec<String>,
    /// Why the rewrite is better
    pub improvements: Vec<String>,
    /// Estimated quality of the rewritten text
    pub quality_score: i32,
    pub rationale: String,
}

/// Ranked rewrite candidates for one requirement text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementResult {
    /// Never empty for non-empty input
    pub enhancements: Vec<EnhancementCandidate>,
    /// Index of the candidate the service recommends applying
    pub recommended_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_serializes_with_wire_field_names() {
        let issue = Issue {
            category: IssueCategory::Ambiguity,
            severity: IssueSeverity::Major,
            description: "Contains ambiguous terms".to_string(),
            problematic_text: "fast".to_string(),
            suggestion: "Be specific".to_string(),
        };

        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "ambiguity");
        assert_eq!(json["severity"], "major");
        assert_eq!(json["problematicText"], "fast");
    }

    #[test]
    fn test_analysis_result_serializes_camel_case() {
        let result = AnalysisResult {
            overall_score: 75,
            issues: Vec::new(),
            analyzed_at: Utc::now(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("overallScore").is_some());
        assert!(json.get("analyzedAt").is_some());
        assert!(json["issues"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_enhancement_result_round_trip() {
        let result = EnhancementResult {
            enhancements: vec![EnhancementCandidate {
                text: "The system shall respond within 2 seconds".to_string(),
                changes: vec!["Replaced 'fast'".to_string()],
                improvements: vec!["Measurable".to_string()],
                quality_score: 85,
                rationale: "Comprehensive rewrite".to_string(),
            }],
            recommended_index: 0,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("recommendedIndex"));
        assert!(json.contains("qualityScore"));

        let back: EnhancementResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}

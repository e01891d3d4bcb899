use super::{AnalysisResult, EnhancementResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Priority of a requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// Lifecycle status of a requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementStatus {
    /// Newly created, not yet analyzed
    #[default]
    Draft,
    /// At least one quality analysis has run
    Analyzed,
    /// Signed off, no further edits expected
    Approved,
}

/// A single requirement belonging to a project
///
/// `last_analysis` and `last_enhancement` persist the most recent quality
/// results exactly as the analysis engine serializes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub id: Uuid,

    pub project_id: Uuid,

    /// Short display title
    pub title: String,

    /// The requirement text under analysis, 1..=5000 characters
    pub text: String,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub status: RequirementStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_analysis: Option<AnalysisResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_enhancement: Option<EnhancementResult>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Requirement {
    pub fn new(project_id: Uuid, title: impl Into<String>, text: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            title: title.into(),
            text: text.into(),
            priority: Priority::default(),
            status: RequirementStatus::default(),
            last_analysis: None,
            last_enhancement: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Bump the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Store an analysis result; a draft requirement moves to `Analyzed`,
    /// an approved one keeps its status
    pub fn record_analysis(&mut self, result: AnalysisResult) {
        self.last_analysis = Some(result);
        if self.status == RequirementStatus::Draft {
            self.status = RequirementStatus::Analyzed;
        }
        self.touch();
    }

    /// Store an enhancement result
    pub fn record_enhancement(&mut self, result: EnhancementResult) {
        self.last_enhancement = Some(result);
        self.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_analysis(score: i32) -> AnalysisResult {
        AnalysisResult {
            overall_score: score,
            issues: Vec::new(),
            analyzed_at: Utc::now(),
        }
    }

    #[test]
    fn test_new_requirement_starts_as_draft() {
        let requirement = Requirement::new(Uuid::new_v4(), "Login", "The system shall log users in");
        assert_eq!(requirement.status, RequirementStatus::Draft);
        assert_eq!(requirement.priority, Priority::Medium);
        assert!(requirement.last_analysis.is_none());
    }

    #[test]
    fn test_record_analysis_moves_draft_to_analyzed() {
        let mut requirement = Requirement::new(Uuid::new_v4(), "Login", "text");
        requirement.record_analysis(sample_analysis(75));
        assert_eq!(requirement.status, RequirementStatus::Analyzed);
        assert_eq!(requirement.last_analysis.as_ref().unwrap().overall_score, 75);
    }

    #[test]
    fn test_record_analysis_keeps_approved_status() {
        let mut requirement = Requirement::new(Uuid::new_v4(), "Login", "text");
        requirement.status = RequirementStatus::Approved;
        requirement.record_analysis(sample_analysis(60));
        assert_eq!(requirement.status, RequirementStatus::Approved);
    }

    #[test]
    fn test_serializes_without_empty_analysis_fields() {
        let requirement = Requirement::new(Uuid::new_v4(), "Login", "text");
        let json = serde_json::to_value(&requirement).unwrap();
        assert!(json.get("lastAnalysis").is_none());
        assert!(json.get("lastEnhancement").is_none());
        assert_eq!(json["status"], "draft");
    }
}

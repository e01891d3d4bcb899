pub mod analysis;
pub mod config;
pub mod project;
pub mod requirement;

pub use analysis::{
    AnalysisResult, EnhancementCandidate, EnhancementResult, Issue, IssueCategory, IssueSeverity,
    Signal, SignalKind,
};
pub use config::{AiConfig, ReqdConfig, ServerConfig, StorageConfig};
pub use project::Project;
pub use requirement::{Priority, Requirement, RequirementStatus};

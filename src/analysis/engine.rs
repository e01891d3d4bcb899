//! Deterministic analysis engine

use super::{detector, issues, rewriter, scorer};
use crate::models::{AnalysisResult, EnhancementResult};
use chrono::Utc;

/// Rule-based substitute for the external AI analysis call.
///
/// Stateless and side-effect free: the same text always yields the same
/// score, issues, and rewrites, so it is safe to share across request
/// tasks without coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAnalysisEngine;

impl MockAnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a requirement text.
    ///
    /// Never fails: degenerate input (including the empty string) yields
    /// the base score and no issues.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let signals = detector::detect(text);

        AnalysisResult {
            overall_score: scorer::score(&signals),
            issues: issues::build(&signals),
            analyzed_at: Utc::now(),
        }
    }

    /// Produce ranked rewrite candidates for a requirement text.
    pub fn enhance(&self, text: &str) -> EnhancementResult {
        rewriter::enhance(text)
    }
}

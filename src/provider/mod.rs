//! External analysis provider
//!
//! The remote AI service is an opaque collaborator: given text it returns a
//! structured result or fails. Failures are routine; callers match on the
//! `Err` and substitute the rule-based engine's output.

#[cfg(feature = "api-direct")]
mod api;

#[cfg(feature = "api-direct")]
pub use api::ApiClient;

use crate::models::{AnalysisResult, EnhancementResult};
use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Errors from the external analysis API
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to analysis API failed: {0}")]
    Request(String),

    #[error("analysis API returned status {0}")]
    Status(u16),

    #[error("failed to decode analysis API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A remote service that can analyze and enhance requirement text
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, ProviderError>;
    async fn enhance(&self, text: &str) -> Result<EnhancementResult, ProviderError>;
}

/// Matches a fenced code block, optionally tagged `json`
static FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").unwrap());

/// Strip a Markdown code fence from a model response, if present.
///
/// Models frequently wrap JSON payloads in ```json fences; the typed decode
/// step wants the bare payload.
pub fn extract_json_payload(raw: &str) -> &str {
    match FENCE_REGEX.captures(raw) {
        Some(captures) => captures.get(1).map_or(raw, |m| m.as_str()),
        None => raw.trim(),
    }
}

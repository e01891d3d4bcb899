//! Analysis orchestration: external provider with deterministic fallback

use crate::analysis::MockAnalysisEngine;
use crate::models::{AnalysisResult, EnhancementResult, ReqdConfig};
use crate::provider::AnalysisProvider;
use std::sync::Arc;

/// Runs quality analysis through the configured provider, substituting the
/// rule-based engine whenever the provider is absent or fails.
///
/// `analyze` and `enhance` never fail: a provider error is logged and the
/// deterministic fallback answers instead.
pub struct AnalysisService {
    provider: Option<Arc<dyn AnalysisProvider>>,
    engine: MockAnalysisEngine,
}

impl AnalysisService {
    /// Service with no external provider; every call uses the rule engine
    pub fn mock_only() -> Self {
        Self {
            provider: None,
            engine: MockAnalysisEngine::new(),
        }
    }

    /// Service backed by an external provider
    pub fn with_provider(provider: Arc<dyn AnalysisProvider>) -> Self {
        Self {
            provider: Some(provider),
            engine: MockAnalysisEngine::new(),
        }
    }

    /// Build from config: a provider is attached only when an API key is
    /// configured and the binary was built with the `api-direct` feature
    pub fn from_config(config: &ReqdConfig) -> Self {
        match config.api_key() {
            #[cfg(feature = "api-direct")]
            Some(key) => match crate::provider::ApiClient::new(&config.ai, key) {
                Ok(client) => Self::with_provider(Arc::new(client)),
                Err(err) => {
                    tracing::warn!(error = %err, "failed to build API client, using rule-based analysis");
                    Self::mock_only()
                }
            },
            #[cfg(not(feature = "api-direct"))]
            Some(_) => {
                tracing::warn!(
                    "API key configured but this build lacks the api-direct feature, using \
                     rule-based analysis"
                );
                Self::mock_only()
            }
            None => Self::mock_only(),
        }
    }

    /// Whether an external provider is attached
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn analyze(&self, text: &str) -> AnalysisResult {
        if let Some(provider) = &self.provider {
            match provider.analyze(text).await {
                Ok(result) => return result,
                Err(err) => {
                    tracing::warn!(error = %err, "analysis provider failed, using rule-based fallback");
                }
            }
        }
        self.engine.analyze(text)
    }

    pub async fn enhance(&self, text: &str) -> EnhancementResult {
        if let Some(provider) = &self.provider {
            match provider.enhance(text).await {
                Ok(result) => return result,
                Err(err) => {
                    tracing::warn!(error = %err, "enhancement provider failed, using rule-based fallback");
                }
            }
        }
        self.engine.enhance(text)
    }

    /// Analyze several texts independently; output order matches input order
    pub async fn analyze_batch(&self, texts: &[String]) -> Vec<AnalysisResult> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.analyze(text).await);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;
    use async_trait::async_trait;

    /// Provider that always fails, for exercising the fallback path
    struct FailingProvider;

    #[async_trait]
    impl AnalysisProvider for FailingProvider {
        async fn analyze(&self, _text: &str) -> Result<AnalysisResult, ProviderError> {
            Err(ProviderError::Status(503))
        }

        async fn enhance(&self, _text: &str) -> Result<EnhancementResult, ProviderError> {
            Err(ProviderError::Status(503))
        }
    }

    /// Provider that returns a canned score, for verifying precedence
    struct CannedProvider;

    #[async_trait]
    impl AnalysisProvider for CannedProvider {
        async fn analyze(&self, _text: &str) -> Result<AnalysisResult, ProviderError> {
            Ok(AnalysisResult {
                overall_score: 91,
                issues: Vec::new(),
                analyzed_at: chrono::Utc::now(),
            })
        }

        async fn enhance(&self, _text: &str) -> Result<EnhancementResult, ProviderError> {
            Err(ProviderError::Status(503))
        }
    }

    #[tokio::test]
    async fn test_mock_only_uses_rule_engine() {
        let service = AnalysisService::mock_only();
        let result = service.analyze("The system should be user-friendly and fast").await;
        assert_eq!(result.overall_score, 25);
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back_to_rules() {
        let service = AnalysisService::with_provider(Arc::new(FailingProvider));
        let result = service.analyze("The system should be user-friendly and fast").await;

        // Rule-engine output, not an error
        assert_eq!(result.overall_score, 25);
        assert_eq!(result.issues.len(), 4);
    }

    #[tokio::test]
    async fn test_provider_success_wins_over_rules() {
        let service = AnalysisService::with_provider(Arc::new(CannedProvider));
        let result = service.analyze("anything").await;
        assert_eq!(result.overall_score, 91);
    }

    #[tokio::test]
    async fn test_enhance_falls_back_too() {
        let service = AnalysisService::with_provider(Arc::new(CannedProvider));
        let result = service.enhance("The parser should handle comments").await;
        assert_eq!(result.enhancements.len(), 2);
    }

    #[tokio::test]
    async fn test_batch_preserves_input_order() {
        let service = AnalysisService::mock_only();
        let texts = vec![
            "The system should be user-friendly and fast".to_string(),
            "The API must respond within 2 seconds for 95% of requests".to_string(),
        ];

        let results = service.analyze_batch(&texts).await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].overall_score, 25);
        assert_eq!(results[1].overall_score, 75);
    }
}

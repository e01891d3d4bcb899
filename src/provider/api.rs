//! Direct HTTP client for an OpenAI-compatible analysis endpoint

use super::{extract_json_payload, AnalysisProvider, ProviderError};
use crate::models::{AiConfig, AnalysisResult, EnhancementResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const SYSTEM_PROMPT: &str = "You are a requirements engineering assistant. Respond with a single \
                             JSON object and no surrounding prose.";

/// Client posting requirement text to a chat completions endpoint
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl ApiClient {
    pub fn new(config: &AiConfig, api_key: String) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
        })
    }

    /// Send one prompt, return the first choice's content
    async fn complete(&self, prompt: String) -> Result<String, ProviderError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt },
            ],
            "temperature": 0,
        });

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::Request("response contained no choices".to_string()))
    }
}

#[async_trait]
impl AnalysisProvider for ApiClient {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, ProviderError> {
        let content = self.complete(analyze_prompt(text)).await?;
        Ok(serde_json::from_str(extract_json_payload(&content))?)
    }

    async fn enhance(&self, text: &str) -> Result<EnhancementResult, ProviderError> {
        let content = self.complete(enhance_prompt(text)).await?;
        Ok(serde_json::from_str(extract_json_payload(&content))?)
    }
}

fn analyze_prompt(text: &str) -> String {
    format!(
        "Analyze the following software requirement for quality problems (ambiguity, weak \
         modals, missing measurable criteria, passive voice).\n\nRequirement:\n{text}\n\nRespond \
         with JSON: {{\"overallScore\": <20-100>, \"issues\": [{{\"type\": ..., \"severity\": \
         ..., \"description\": ..., \"problematicText\": ..., \"suggestion\": ...}}], \
         \"analyzedAt\": <ISO-8601 UTC timestamp>}}"
    )
}

fn enhance_prompt(text: &str) -> String {
    format!(
        "Rewrite the following software requirement into up to 3 improved \
         versions.\n\nRequirement:\n{text}\n\nRespond with JSON: {{\"enhancements\": \
         [{{\"text\": ..., \"changes\": [...], \"improvements\": [...], \"qualityScore\": \
         <20-100>, \"rationale\": ...}}], \"recommendedIndex\": <index of the best version>}}"
    )
}

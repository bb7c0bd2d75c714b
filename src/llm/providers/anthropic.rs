//! Anthropic provider implementation
//!
//! This module provides Anthropic Messages API integration for the LLM provider system.

use crate::llm::provider::{
    CompletionRequest, CompletionResponse, FinishReason, LlmError, LlmProvider, Message,
    MessageRole, TokenUsage,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Anthropic requires max_tokens on every request
const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Anthropic provider configuration
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub version: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.anthropic.com/v1".to_string(),
            timeout: Duration::from_secs(60),
            version: "2023-06-01".to_string(),
        }
    }
}

/// Anthropic provider implementation
pub struct AnthropicProvider {
    config: AnthropicConfig,
    client: Client,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider
    pub fn new(config: AnthropicConfig) -> Result<Self, LlmError> {
        if config.api_key.is_empty() {
            return Err(LlmError::NotConfigured(
                "Anthropic API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Split the system prompt out of the conversation; Anthropic takes it as a top-level field
    fn convert_messages(messages: &[Message]) -> (Option<String>, Vec<AnthropicMessage>) {
        let mut system_message = None;
        let mut anthropic_messages = Vec::new();

        for message in messages {
            let role = match message.role {
                MessageRole::System => {
                    system_message = Some(message.content.clone());
                    continue;
                }
                MessageRole::User => "user",
                MessageRole::Assistant => "assistant",
            };
            anthropic_messages.push(AnthropicMessage {
                role: role.to_string(),
                content: message.content.clone(),
            });
        }

        (system_message, anthropic_messages)
    }

    fn convert_finish_reason(reason: Option<&str>) -> FinishReason {
        match reason {
            Some("end_turn") | Some("stop_sequence") => FinishReason::Stop,
            Some("max_tokens") => FinishReason::Length,
            _ => FinishReason::Error,
        }
    }

    async fn post_messages(
        &self,
        request: &AnthropicCompletionRequest,
    ) -> Result<reqwest::Response, LlmError> {
        self.client
            .post(format!("{}/messages", self.config.base_url))
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", &self.config.version)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError(e.to_string()))
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let (system_message, messages) = Self::convert_messages(&request.messages);

        let anthropic_request = AnthropicCompletionRequest {
            model: request.model.clone(),
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            messages,
            system: system_message,
            temperature: request.temperature,
        };

        debug!(
            "Anthropic request: {} messages, model {}",
            anthropic_request.messages.len(),
            anthropic_request.model
        );

        let response = self.post_messages(&anthropic_request).await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::from_status("Anthropic", status, &error_text));
        }

        let anthropic_response: AnthropicCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let text_blocks: Vec<String> = anthropic_response
            .content
            .into_iter()
            .filter(|c| c.content_type == "text")
            .filter_map(|c| c.text)
            .collect();

        if text_blocks.is_empty() {
            return Err(LlmError::InvalidResponse(
                "No text content returned from Anthropic".to_string(),
            ));
        }
        let content = text_blocks.concat();

        let usage = TokenUsage {
            prompt_tokens: anthropic_response.usage.input_tokens,
            completion_tokens: anthropic_response.usage.output_tokens,
            total_tokens: anthropic_response.usage.input_tokens
                + anthropic_response.usage.output_tokens,
        };

        Ok(CompletionResponse {
            content: Some(content),
            model: anthropic_response.model,
            usage,
            finish_reason: Self::convert_finish_reason(anthropic_response.stop_reason.as_deref()),
            metadata: request.metadata,
        })
    }
}

#[derive(Debug, Serialize)]
struct AnthropicCompletionRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicCompletionResponse {
    content: Vec<AnthropicContent>,
    model: String,
    stop_reason: Option<String>,
    usage: AnthropicUsage,
}

#[derive(Debug, Deserialize)]
struct AnthropicContent {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anthropic_config_default() {
        let config = AnthropicConfig::default();
        assert_eq!(config.base_url, "https://api.anthropic.com/v1");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.version, "2023-06-01");
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_anthropic_provider_creation_without_api_key() {
        let result = AnthropicProvider::new(AnthropicConfig::default());
        assert!(matches!(result, Err(LlmError::NotConfigured(_))));
    }

    #[test]
    fn test_anthropic_provider_name() {
        let config = AnthropicConfig {
            api_key: "test-key".to_string(),
            ..Default::default()
        };
        let provider = AnthropicProvider::new(config).unwrap();
        assert_eq!(provider.name(), "anthropic");
    }

    #[test]
    fn test_message_conversion_lifts_system_prompt() {
        let messages = vec![
            Message::system("You are a web designer"),
            Message::user("Plan a site"),
        ];

        let (system, anthropic_messages) = AnthropicProvider::convert_messages(&messages);
        assert_eq!(system, Some("You are a web designer".to_string()));
        assert_eq!(anthropic_messages.len(), 1);
        assert_eq!(anthropic_messages[0].role, "user");
        assert_eq!(anthropic_messages[0].content, "Plan a site");
    }

    #[test]
    fn test_finish_reason_conversion() {
        assert_eq!(
            AnthropicProvider::convert_finish_reason(Some("end_turn")),
            FinishReason::Stop
        );
        assert_eq!(
            AnthropicProvider::convert_finish_reason(Some("max_tokens")),
            FinishReason::Length
        );
        assert_eq!(
            AnthropicProvider::convert_finish_reason(Some("stop_sequence")),
            FinishReason::Stop
        );
        assert_eq!(
            AnthropicProvider::convert_finish_reason(None),
            FinishReason::Error
        );
    }

    #[test]
    fn test_anthropic_request_serialization() {
        let request = AnthropicCompletionRequest {
            model: "claude-3-haiku-20240307".to_string(),
            max_tokens: 100,
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: "Hello".to_string(),
            }],
            system: None,
            temperature: Some(0.5),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"model\":\"claude-3-haiku-20240307\""));
        assert!(json.contains("\"max_tokens\":100"));
        assert!(json.contains("\"temperature\":0.5"));
        assert!(!json.contains("system"));
    }
}

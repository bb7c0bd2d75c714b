//! Mock implementations for testing
//!
//! Provides a scripted LlmProvider and TextGenerator doubles so pipelines can
//! be exercised without network access.

use crate::error::{SiteError, SiteResult};
use crate::generation::TextGenerator;
use crate::llm::provider::{
    CompletionRequest, CompletionResponse, FinishReason, LlmError, LlmProvider, TokenUsage,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Mock LLM provider returning scripted responses in order
#[derive(Debug, Default)]
pub struct MockLlmProvider {
    pub responses: Vec<String>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
    pub should_fail: bool,
    /// Zero-based call index that fails; earlier calls succeed
    pub fail_on_call: Option<usize>,
}

impl MockLlmProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses,
            ..Default::default()
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    pub fn single_response(response: impl Into<String>) -> Self {
        Self::new(vec![response.into()])
    }

    pub fn failing_on_call(responses: Vec<String>, call: usize) -> Self {
        Self {
            responses,
            fail_on_call: Some(call),
            ..Default::default()
        }
    }

    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// Last message of every request received, in order
    pub async fn recorded_prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .await
            .iter()
            .filter_map(|request| request.messages.last().map(|m| m.content.clone()))
            .collect()
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let mut requests = self.requests.lock().await;
        let call = requests.len();
        requests.push(request);

        if self.should_fail || self.fail_on_call == Some(call) {
            return Err(LlmError::RequestFailed(format!(
                "Mock LLM failure on call {call}"
            )));
        }

        let content = if self.responses.is_empty() {
            "Mock response".to_string()
        } else {
            self.responses[call % self.responses.len()].clone()
        };

        Ok(CompletionResponse {
            content: Some(content),
            model: "mock-model".to_string(),
            usage: TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            },
            finish_reason: FinishReason::Stop,
            metadata: HashMap::new(),
        })
    }
}

/// Text generator that records prompts and replays scripted responses
#[derive(Debug, Default)]
pub struct RecordingGenerator {
    responses: Vec<String>,
    prompts: std::sync::Mutex<Vec<String>>,
    fail_on_call: Option<usize>,
}

impl RecordingGenerator {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses,
            ..Default::default()
        }
    }

    pub fn failing_on_call(responses: Vec<String>, call: usize) -> Self {
        Self {
            responses,
            fail_on_call: Some(call),
            ..Default::default()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn generate(&self, prompt: &str) -> SiteResult<String> {
        let call = {
            let mut prompts = self
                .prompts
                .lock()
                .map_err(|_| LlmError::RequestFailed("prompt log poisoned".to_string()))?;
            prompts.push(prompt.to_string());
            prompts.len() - 1
        };

        if self.fail_on_call == Some(call) {
            return Err(SiteError::from(LlmError::RequestFailed(format!(
                "Scripted failure on call {call}"
            ))));
        }

        Ok(self
            .responses
            .get(call)
            .cloned()
            .unwrap_or_else(|| format!("response {call}")))
    }
}

/// Text generator that always fails
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> SiteResult<String> {
        Err(SiteError::from(LlmError::NetworkError(
            "Mock backend unreachable".to_string(),
        )))
    }
}

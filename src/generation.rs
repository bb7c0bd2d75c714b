//! Text generation client
//!
//! [`TextGenerator`] is the single seam between pipeline stages and whatever
//! produces text: the real [`LlmTextClient`] backed by an [`LlmProvider`], or
//! a substitute such as [`FnGenerator`]. Callers always hand over a fully
//! formatted prompt.

use crate::config::LlmSection;
use crate::error::SiteResult;
use crate::llm::provider::{CompletionRequest, LlmProvider, Message};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Prompt in, text out
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> SiteResult<String>;
}

/// Request parameters applied to every prompt
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub system_prompt: Option<String>,
}

impl GenerationSettings {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: Some(0.0),
            max_tokens: None,
            system_prompt: None,
        }
    }
}

impl From<&LlmSection> for GenerationSettings {
    fn from(section: &LlmSection) -> Self {
        Self {
            model: section.model().to_string(),
            temperature: Some(section.temperature),
            max_tokens: section.max_tokens,
            system_prompt: section.system_prompt.clone(),
        }
    }
}

/// Text generation client backed by an LLM provider
#[derive(Clone)]
pub struct LlmTextClient {
    provider: Arc<dyn LlmProvider>,
    settings: GenerationSettings,
}

impl LlmTextClient {
    pub fn new(provider: Arc<dyn LlmProvider>, settings: GenerationSettings) -> Self {
        Self { provider, settings }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Build the provider request for a prompt (pure function)
    fn build_request(settings: &GenerationSettings, prompt: &str) -> CompletionRequest {
        let mut messages = Vec::with_capacity(2);
        if let Some(system_prompt) = &settings.system_prompt {
            messages.push(Message::system(system_prompt.clone()));
        }
        messages.push(Message::user(prompt));

        CompletionRequest {
            messages,
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            metadata: HashMap::new(),
        }
    }
}

impl fmt::Debug for LlmTextClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmTextClient")
            .field("provider", &self.provider.name())
            .field("settings", &self.settings)
            .finish()
    }
}

#[async_trait]
impl TextGenerator for LlmTextClient {
    async fn generate(&self, prompt: &str) -> SiteResult<String> {
        debug!(
            provider = self.provider.name(),
            model = %self.settings.model,
            prompt = %prompt,
            "Sending prompt"
        );

        let request = Self::build_request(&self.settings, prompt);
        let response = self.provider.complete(request).await?;

        Ok(response.content.unwrap_or_default())
    }
}

/// Adapter turning a plain closure into a [`TextGenerator`]
pub struct FnGenerator<F> {
    func: F,
}

impl<F> FnGenerator<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

#[async_trait]
impl<F> TextGenerator for FnGenerator<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    async fn generate(&self, prompt: &str) -> SiteResult<String> {
        Ok((self.func)(prompt))
    }
}

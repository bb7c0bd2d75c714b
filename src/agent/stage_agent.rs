//! A named prompt template bound to a text generator

use crate::agent::response::AgentResponse;
use crate::agent::template::PromptTemplate;
use crate::config::ConfigError;
use crate::error::SiteResult;
use crate::generation::{FnGenerator, TextGenerator};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// One pipeline stage: fills its template with the input and asks its generator
#[derive(Clone)]
pub struct Agent {
    name: String,
    template: PromptTemplate,
    generator: Arc<dyn TextGenerator>,
}

impl Agent {
    pub fn new(
        name: impl Into<String>,
        template: &str,
        generator: Arc<dyn TextGenerator>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let template = PromptTemplate::parse(&name, template)?;
        Ok(Self {
            name,
            template,
            generator,
        })
    }

    /// Build an agent whose text comes from `func` instead of a backend.
    ///
    /// `func` receives the filled prompt, not the raw input.
    pub fn with_override<F>(
        name: impl Into<String>,
        template: &str,
        func: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::new(name, template, Arc::new(FnGenerator::new(func)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    pub async fn run(&self, input: &str) -> SiteResult<AgentResponse> {
        let prompt = self.template.fill(input);
        debug!(
            agent = %self.name,
            input_len = input.len(),
            prompt_len = prompt.len(),
            "Running agent"
        );

        let content = self.generator.generate(&prompt).await?;
        Ok(AgentResponse::new(content))
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("template", &self.template.to_string())
            .finish_non_exhaustive()
    }
}

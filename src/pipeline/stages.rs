//! The four fixed pipeline stages

use crate::agent::Agent;
use crate::config::{ConfigError, PromptOverrides};
use crate::generation::TextGenerator;
use std::fmt;
use std::sync::Arc;

/// Pipeline stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Planner,
    Content,
    Design,
    Seo,
}

impl StageKind {
    pub const ALL: [StageKind; 4] = [
        StageKind::Planner,
        StageKind::Content,
        StageKind::Design,
        StageKind::Seo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StageKind::Planner => "Planner",
            StageKind::Content => "Content",
            StageKind::Design => "Design",
            StageKind::Seo => "SEO",
        }
    }

    pub fn default_template(&self) -> &'static str {
        match self {
            StageKind::Planner => {
                "Plan a website around the topic: {input}. Include sections and layout."
            }
            StageKind::Content => "Generate page content based on this plan: {input}",
            StageKind::Design => {
                "Generate HTML and CSS for the following content. Use accessible \
                 markup and mobile-first responsive design: {input}"
            }
            StageKind::Seo => "Improve the SEO metadata and structure for this HTML: {input}",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The Planner, Content, Design and SEO agents
#[derive(Debug, Clone)]
pub struct PipelineStages {
    planner: Agent,
    content: Agent,
    design: Agent,
    seo: Agent,
}

impl PipelineStages {
    /// All four stages with their default templates, sharing one generator
    pub fn with_defaults(generator: Arc<dyn TextGenerator>) -> Self {
        Self::new(generator, &PromptOverrides::default())
            .expect("built-in templates contain exactly one placeholder")
    }

    /// All four stages sharing one generator, with configured template overrides applied
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        overrides: &PromptOverrides,
    ) -> Result<Self, ConfigError> {
        let build = |kind: StageKind| {
            let template = overrides
                .template_for(kind)
                .unwrap_or_else(|| kind.default_template());
            Agent::new(kind.name(), template, generator.clone())
        };

        Ok(Self {
            planner: build(StageKind::Planner)?,
            content: build(StageKind::Content)?,
            design: build(StageKind::Design)?,
            seo: build(StageKind::Seo)?,
        })
    }

    /// Assemble from individually built agents
    pub fn from_agents(planner: Agent, content: Agent, design: Agent, seo: Agent) -> Self {
        Self {
            planner,
            content,
            design,
            seo,
        }
    }

    pub fn get(&self, kind: StageKind) -> &Agent {
        match kind {
            StageKind::Planner => &self.planner,
            StageKind::Content => &self.content,
            StageKind::Design => &self.design,
            StageKind::Seo => &self.seo,
        }
    }

    /// Stages paired with their agents, in execution order
    pub fn ordered(&self) -> impl Iterator<Item = (StageKind, &Agent)> {
        StageKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

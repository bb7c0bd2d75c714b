//! Command-line interface
//!
//! Argument parsing plus the wiring from a parsed [`Cli`] to a finished run:
//! load configuration, apply flag overrides, build the provider and drive the
//! pipeline. `main` only sets up logging and turns the result into an exit
//! status.

use crate::config::{ProviderKind, SiteConfig};
use crate::error::SiteResult;
use crate::generation::{GenerationSettings, LlmTextClient};
use crate::llm::provider::LlmProvider;
use crate::llm::providers::{AnthropicConfig, AnthropicProvider, OpenAiConfig, OpenAiProvider};
use crate::pipeline::{PipelineStages, SiteOrchestrator};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Generate a website via a chain of LLM agents
#[derive(Parser, Debug)]
#[command(name = "sitechain")]
#[command(about = "Generate a website via multi-agent chain")]
#[command(version)]
pub struct Cli {
    /// Topic for the website
    pub topic: String,

    /// Directory for generated site [default: site_output]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "SITECHAIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Model to use instead of the configured one
    #[arg(long)]
    pub model: Option<String>,

    /// Verbose logging
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Configuration and output directory after flag overrides
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub config: SiteConfig,
    pub output_dir: PathBuf,
}

impl Cli {
    /// Load configuration and apply `--model` and `--output` on top of it
    pub fn plan(&self) -> SiteResult<RunPlan> {
        let (mut config, source) = SiteConfig::discover(self.config.as_deref())?;
        match source {
            Some(path) => info!("Loaded configuration from: {}", path.display()),
            None => info!("No configuration file found, using defaults"),
        }

        if let Some(model) = &self.model {
            config.llm.model = Some(model.clone());
            config.validate()?;
        }

        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| config.output.dir.clone());

        Ok(RunPlan { config, output_dir })
    }
}

/// Provider factory for creating LLM providers from configuration
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    pub fn create_provider(config: &SiteConfig) -> SiteResult<Arc<dyn LlmProvider>> {
        let api_key = config.get_llm_api_key()?;
        let llm = &config.llm;

        let provider: Arc<dyn LlmProvider> = match llm.provider {
            ProviderKind::OpenAi => {
                let mut openai_config = OpenAiConfig {
                    api_key,
                    timeout: llm.timeout(),
                    ..Default::default()
                };
                if let Some(base_url) = &llm.base_url {
                    openai_config.base_url = base_url.clone();
                }
                Arc::new(OpenAiProvider::new(openai_config)?)
            }
            ProviderKind::Anthropic => {
                let mut anthropic_config = AnthropicConfig {
                    api_key,
                    timeout: llm.timeout(),
                    ..Default::default()
                };
                if let Some(base_url) = &llm.base_url {
                    anthropic_config.base_url = base_url.clone();
                }
                Arc::new(AnthropicProvider::new(anthropic_config)?)
            }
        };

        Ok(provider)
    }
}

/// Inject one provider into every stage
pub fn build_orchestrator(
    config: &SiteConfig,
    provider: Arc<dyn LlmProvider>,
) -> SiteResult<SiteOrchestrator> {
    info!(
        provider = provider.name(),
        model = config.llm.model(),
        "LLM provider ready"
    );

    let client = Arc::new(LlmTextClient::new(
        provider,
        GenerationSettings::from(&config.llm),
    ));
    let stages = PipelineStages::new(client, &config.prompts)?;

    Ok(SiteOrchestrator::new(stages))
}

/// Run the pipeline with the provider named in configuration
pub async fn run(cli: &Cli) -> SiteResult<PathBuf> {
    let plan = cli.plan()?;
    let provider = LlmProviderFactory::create_provider(&plan.config)?;
    execute(&cli.topic, &plan, provider).await
}

/// Run the pipeline with an already constructed provider
pub async fn run_with_provider(cli: &Cli, provider: Arc<dyn LlmProvider>) -> SiteResult<PathBuf> {
    let plan = cli.plan()?;
    execute(&cli.topic, &plan, provider).await
}

async fn execute(
    topic: &str,
    plan: &RunPlan,
    provider: Arc<dyn LlmProvider>,
) -> SiteResult<PathBuf> {
    let orchestrator = build_orchestrator(&plan.config, provider)?;
    orchestrator.generate(topic, &plan.output_dir).await
}

/// Process exit status for a finished run
pub fn exit_status(result: &SiteResult<PathBuf>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) => u8::try_from(e.exit_code()).unwrap_or(1),
    }
}

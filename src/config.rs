//! Configuration system for sitechain
//!
//! Configuration is optional: every field has a default, so a run with no
//! file talks to OpenAI using the key in `OPENAI_API_KEY` and writes to
//! `site_output/`. A TOML file can pick another provider or model, tune the
//! request parameters and override individual stage prompts.

use crate::agent::PromptTemplate;
use crate::pipeline::StageKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Locations searched when no config path is given
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["sitechain.toml", "config/sitechain.toml"];

/// Default output directory for the generated page
pub const DEFAULT_OUTPUT_DIR: &str = "site_output";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub llm: LlmSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub prompts: PromptOverrides,
}

/// Supported LLM backends
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Anthropic,
}

impl ProviderKind {
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "gpt-3.5-turbo",
            ProviderKind::Anthropic => "claude-3-5-haiku-20241022",
        }
    }

    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
        }
    }
}

/// LLM section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmSection {
    /// Backend to call
    #[serde(default)]
    pub provider: ProviderKind,
    /// Model identifier; provider default when unset
    pub model: Option<String>,
    /// Environment variable containing the API key; provider default when unset
    pub api_key_env: Option<String>,
    /// Override for the provider API base URL
    pub base_url: Option<String>,
    /// Optional system prompt sent ahead of every stage prompt
    pub system_prompt: Option<String>,
    /// Sampling temperature (0.0 to 2.0)
    #[serde(default)]
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    /// HTTP timeout per backend call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for LlmSection {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            model: None,
            api_key_env: None,
            base_url: None,
            system_prompt: None,
            temperature: 0.0,
            max_tokens: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LlmSection {
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    pub fn api_key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or_else(|| self.provider.default_api_key_env())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Output section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputSection {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

/// Per-stage prompt template overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PromptOverrides {
    pub planner: Option<String>,
    pub content: Option<String>,
    pub design: Option<String>,
    pub seo: Option<String>,
}

impl PromptOverrides {
    pub fn template_for(&self, stage: StageKind) -> Option<&str> {
        match stage {
            StageKind::Planner => self.planner.as_deref(),
            StageKind::Content => self.content.as_deref(),
            StageKind::Design => self.design.as_deref(),
            StageKind::Seo => self.seo.as_deref(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
    #[error("Invalid prompt template for {stage}: {reason}")]
    InvalidTemplate { stage: String, reason: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SiteConfig {
    /// Load configuration from a TOML file and validate it
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, else the first default location that exists, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load_from_file(path)?, Some(path.to_path_buf())));
        }

        for candidate in DEFAULT_CONFIG_PATHS {
            let path = PathBuf::from(candidate);
            if path.is_file() {
                return Ok((Self::load_from_file(&path)?, Some(path)));
            }
        }

        Ok((Self::default(), None))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::InvalidConfig(format!(
                "temperature {} must be between 0.0 and 2.0",
                self.llm.temperature
            )));
        }

        if self.llm.timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.llm.model().trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "model must not be empty".to_string(),
            ));
        }

        for stage in StageKind::ALL {
            if let Some(template) = self.prompts.template_for(stage) {
                PromptTemplate::parse(stage.name(), template)?;
            }
        }

        Ok(())
    }

    /// Read the API key from the configured environment variable
    pub fn get_llm_api_key(&self) -> Result<String, ConfigError> {
        let name = self.llm.api_key_env();
        std::env::var(name)
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::EnvVarNotFound(name.to_string()))
    }
}

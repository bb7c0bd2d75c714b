//! Prompt templates with a single `{input}` placeholder

use crate::config::ConfigError;
use std::fmt;

/// Placeholder substituted with a stage's input text
pub const PLACEHOLDER: &str = "{input}";

/// A template validated to contain exactly one placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    prefix: String,
    suffix: String,
}

impl PromptTemplate {
    /// Validate `template`; `owner` names the stage in error messages
    pub fn parse(owner: &str, template: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidTemplate {
            stage: owner.to_string(),
            reason,
        };

        match template.matches(PLACEHOLDER).count() {
            1 => {}
            0 => return Err(invalid(format!("missing {PLACEHOLDER} placeholder"))),
            n => {
                return Err(invalid(format!(
                    "expected one {PLACEHOLDER} placeholder, found {n}"
                )))
            }
        }

        let (prefix, suffix) = template
            .split_once(PLACEHOLDER)
            .ok_or_else(|| invalid(format!("missing {PLACEHOLDER} placeholder")))?;

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// Substitute `input` verbatim at the placeholder
    pub fn fill(&self, input: &str) -> String {
        let mut prompt = String::with_capacity(self.prefix.len() + input.len() + self.suffix.len());
        prompt.push_str(&self.prefix);
        prompt.push_str(input);
        prompt.push_str(&self.suffix);
        prompt
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, PLACEHOLDER, self.suffix)
    }
}

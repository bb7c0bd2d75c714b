//! Pipeline orchestrator
//!
//! Drives Planner → Content → Design → SEO → site writer. Each stage's
//! output is handed verbatim to the next stage; the first error ends the run
//! before anything is written.

use crate::error::SiteResult;
use crate::pipeline::stages::PipelineStages;
use crate::site::SiteWriter;
use crate::{run_span, stage_span};
use std::path::{Path, PathBuf};
use tracing::{info, warn, Instrument};

/// Sequences the stages and writes the result
#[derive(Debug, Clone)]
pub struct SiteOrchestrator {
    stages: PipelineStages,
    writer: SiteWriter,
}

impl SiteOrchestrator {
    pub fn new(stages: PipelineStages) -> Self {
        Self {
            stages,
            writer: SiteWriter::new(),
        }
    }

    pub fn stages(&self) -> &PipelineStages {
        &self.stages
    }

    /// Run all four stages on `topic` and return the final HTML without writing it
    pub async fn render(&self, topic: &str) -> SiteResult<String> {
        let mut text = topic.to_string();

        for (kind, agent) in self.stages.ordered() {
            let response = agent
                .run(&text)
                .instrument(stage_span!(stage = kind.name()))
                .await
                .map_err(|e| {
                    warn!(stage = kind.name(), error = %e.redacted(), "Stage failed");
                    e
                })?;

            info!(
                stage = kind.name(),
                output_len = response.content.len(),
                "Stage complete"
            );
            text = response.into_content();
        }

        Ok(text)
    }

    /// Generate the page for `topic` and write it to `<output_dir>/index.html`
    pub async fn generate(&self, topic: &str, output_dir: &Path) -> SiteResult<PathBuf> {
        let span = run_span!(topic = %topic, output_dir = %output_dir.display());

        async {
            info!("Starting site generation");
            let html = self.render(topic).await?;
            self.writer.write(&html, output_dir).await
        }
        .instrument(span)
        .await
    }
}

//! The fixed site-generation pipeline
//!
//! [`PipelineStages`] holds the four agents; [`SiteOrchestrator`] runs them
//! in order and hands the last output to the site writer.

pub mod orchestrator;
pub mod stages;

pub use orchestrator::SiteOrchestrator;
pub use stages::{PipelineStages, StageKind};

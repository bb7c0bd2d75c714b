//! sitechain - generate a static web page from a topic with a chain of LLM agents
//!
//! Four agents run in a fixed order, each one's output becoming the next
//! one's input:
//!
//! 1. **Planner**: topic → site plan (sections, layout)
//! 2. **Content**: plan → page copy
//! 3. **Design**: copy → accessible, responsive HTML and CSS
//! 4. **SEO**: HTML → HTML with improved metadata and structure
//!
//! The final HTML is written to `<output_dir>/index.html`.
//!
//! # Quick Start
//!
//! ```rust
//! use sitechain::agent::Agent;
//! use sitechain::pipeline::{PipelineStages, SiteOrchestrator};
//!
//! # tokio_test::block_on(async {
//! let stage = |name: &str| Agent::with_override(name, "{input}!", |prompt| prompt.to_string());
//! let stages = PipelineStages::from_agents(
//!     stage("Planner")?,
//!     stage("Content")?,
//!     stage("Design")?,
//!     stage("SEO")?,
//! );
//!
//! let html = SiteOrchestrator::new(stages).render("hello").await?;
//! assert_eq!(html, "hello!!!!");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! # }).unwrap();
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod llm;
pub mod observability;
pub mod pipeline;
pub mod site;
pub mod testing;

pub use agent::{Agent, AgentResponse, PromptTemplate};
pub use config::{ConfigError, SiteConfig};
pub use error::{ErrorKind, SiteError, SiteResult};
pub use generation::{FnGenerator, GenerationSettings, LlmTextClient, TextGenerator};
pub use pipeline::{PipelineStages, SiteOrchestrator, StageKind};
pub use site::SiteWriter;

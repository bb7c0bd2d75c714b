//! Agents: prompt templates bound to text generation
//!
//! An agent fills its template with the input text, sends the prompt to its
//! generator and wraps the reply in an [`AgentResponse`].

pub mod response;
pub mod stage_agent;
pub mod template;

pub use response::AgentResponse;
pub use stage_agent::Agent;
pub use template::{PromptTemplate, PLACEHOLDER};

//! Observability for sitechain
//!
//! Structured logging through `tracing`, with span macros for pipeline runs
//! and individual stages.

pub mod logging;

pub use logging::{init_default_logging, init_logging, LogFormat};

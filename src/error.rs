//! Error types for site generation
//!
//! Every failure is fatal to a run. Backend failures are wrapped once at the
//! generation boundary and then propagated unchanged; filesystem failures
//! carry the path that was being touched.

use crate::config::ConfigError;
use crate::llm::provider::LlmError;
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

/// Process exit code for configuration failures
pub const EXIT_CONFIG: i32 = 1;
/// Process exit code for backend generation failures
pub const EXIT_GENERATION: i32 = 2;
/// Process exit code for filesystem failures
pub const EXIT_FILESYSTEM: i32 = 3;

/// Main error type for site generation
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Generation failed: {source}")]
    Generation {
        #[from]
        source: LlmError,
    },

    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Coarse classification of a [`SiteError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Generation,
    Filesystem,
    Config,
}

impl SiteError {
    /// Create a filesystem error for the given path
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SiteError::Generation { .. } => ErrorKind::Generation,
            SiteError::Filesystem { .. } => ErrorKind::Filesystem,
            SiteError::Config(_) => ErrorKind::Config,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Config => EXIT_CONFIG,
            ErrorKind::Generation => EXIT_GENERATION,
            ErrorKind::Filesystem => EXIT_FILESYSTEM,
        }
    }

    /// Error text safe to print or log
    pub fn redacted(&self) -> String {
        redact_secrets(&self.to_string())
    }
}

/// Result type for site generation operations
pub type SiteResult<T> = Result<T, SiteError>;

fn secret_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(password|token|key|secret)([=:]\s*)\S+").expect("secret pattern is valid")
    })
}

fn bearer_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)bearer\s+\S+").expect("bearer pattern is valid"))
}

fn api_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\bsk-[A-Za-z0-9_-]+").expect("api key pattern is valid")
    })
}

/// Mask credential-looking values; provider error bodies sometimes echo them back
pub fn redact_secrets(message: &str) -> String {
    let sanitized = secret_pattern().replace_all(message, "${1}${2}***");
    let sanitized = bearer_pattern().replace_all(&sanitized, "Bearer ***");
    let sanitized = api_key_pattern().replace_all(&sanitized, "sk-***");

    const MAX_LEN: usize = 2000;
    if sanitized.len() > MAX_LEN {
        let truncate_suffix = "...[truncated]";
        let mut cut = MAX_LEN - truncate_suffix.len();
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        return format!("{}{}", &sanitized[..cut], truncate_suffix);
    }

    sanitized.into_owned()
}

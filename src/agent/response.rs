//! Agent response record

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Output of one agent invocation
///
/// `metadata` is reserved for annotations such as token counts or the model
/// name; agents currently leave it unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, Value>>,
}

impl AgentResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: None,
        }
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

//! Guard-specific error types.

use thiserror::Error;

/// Errors that can occur while turning a hook payload into a request.
#[derive(Debug, Error)]
pub enum GuardError {
    /// The `tool_input` object does not have the shape the tool implies.
    #[error("Invalid tool_input for {tool}: {source}")]
    InvalidToolInput {
        tool: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GuardError {
    /// Create a new "invalid tool input" error.
    pub fn invalid_tool_input(tool: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidToolInput {
            tool: tool.into(),
            source,
        }
    }
}

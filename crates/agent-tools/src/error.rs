//! Error types for tool operations.

use thiserror::Error;

/// Errors that can occur during tool execution.
///
/// These cover malformed calls. Domain outcomes the model should relay to the
/// user (an unknown plan tier, an unreadable device catalog) are reported as
/// failed [`ToolOutput`](crate::ToolOutput)s instead.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Missing required parameter.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ToolError {
    /// Shorthand for [`ToolError::InvalidParameter`].
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

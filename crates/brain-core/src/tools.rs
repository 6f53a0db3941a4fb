//! Tool execution support for dialogue controllers.
//!
//! The model hosted by the dialogue controller decides when to call a tool;
//! the controller turns that decision into a [`ToolRequest`] and hands it to
//! a [`ToolExecutor`]. The result content is sent back to the model verbatim.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Optional metadata about the tool call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolRequestMeta {
    /// Name of the agent whose model issued the call, if known.
    pub agent: Option<String>,
    /// Conversation identifier, if the controller tracks one.
    pub session_id: Option<String>,
}

/// Result of a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// The tool call ID this result corresponds to.
    pub tool_call_id: String,
    /// The result content (will be sent back to the model).
    pub content: String,
    /// Whether the tool execution succeeded.
    pub success: bool,
}

impl ToolResult {
    /// Create a successful tool result.
    pub fn success(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            content: content.into(),
            success: true,
        }
    }

    /// Create a failed tool result whose content is passed through unchanged.
    ///
    /// Used for domain failures the tool already phrased for the model, such
    /// as a JSON error object.
    pub fn failure(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            content: content.into(),
            success: false,
        }
    }

    /// Create a failed tool result with an `Error: ` prefix.
    pub fn error(tool_call_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            content: format!("Error: {}", error.into()),
            success: false,
        }
    }
}

/// A request to execute a tool.
#[derive(Debug, Clone)]
pub struct ToolRequest {
    /// Unique ID for this tool call.
    pub id: String,
    /// Name of the tool to execute.
    pub name: String,
    /// Arguments as a JSON object.
    pub arguments: HashMap<String, Value>,
    /// Optional metadata about the tool call.
    pub metadata: Option<ToolRequestMeta>,
}

impl ToolRequest {
    /// Parse arguments from a JSON string.
    ///
    /// An empty string is treated as an empty argument object, which is what
    /// models send for tools without required parameters.
    pub fn from_call(
        id: String,
        name: String,
        arguments_json: &str,
    ) -> Result<Self, serde_json::Error> {
        let arguments: HashMap<String, Value> = if arguments_json.trim().is_empty() {
            HashMap::new()
        } else {
            serde_json::from_str(arguments_json)?
        };
        Ok(Self {
            id,
            name,
            arguments,
            metadata: None,
        })
    }

    /// Attach metadata to an existing tool request.
    pub fn with_metadata(mut self, metadata: ToolRequestMeta) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Trait for executing tools called by a model.
///
/// Implementations never fail outright: every outcome, including unknown
/// tools and bad arguments, is reported through [`ToolResult`] so the
/// controller can relay it to the model.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool and return the result.
    async fn execute(&self, request: ToolRequest) -> ToolResult;

    /// List the tools this executor supports.
    fn supported_tools(&self) -> Vec<&str>;
}

//! Agent profiles: what the dialogue controller needs to host an agent.

use serde::{Deserialize, Serialize};

use crate::definition::ToolDefinition;
use crate::prompt::hash_prompt;

/// Model used when the controller does not override it.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Everything an external LLM host needs to run an agent: its identity,
/// instruction script, model and the tools it may call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Agent name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Model identifier.
    pub model: String,
    /// Natural-language instruction script.
    pub instruction: String,
    /// SHA-256 fingerprint of the instruction.
    pub instruction_hash: String,
    /// Tools the agent may call.
    pub tools: Vec<ToolDefinition>,
}

impl AgentProfile {
    /// Create a profile using [`DEFAULT_MODEL`] and no tools.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        instruction: impl Into<String>,
    ) -> Self {
        let instruction = instruction.into();
        Self {
            name: name.into(),
            description: description.into(),
            model: DEFAULT_MODEL.to_string(),
            instruction_hash: hash_prompt(&instruction),
            instruction,
            tools: Vec::new(),
        }
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the tool definitions.
    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    /// Names of the tools in the profile, in order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }
}

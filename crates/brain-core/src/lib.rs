//! Core types shared by the agent tool layers.
//!
//! This crate provides the interface between an external dialogue controller
//! (the LLM host) and the tool sets each agent exposes. It defines:
//!
//! - [`ToolExecutor`] - Trait for executing tool calls issued by a model
//! - [`ToolRequest`] / [`ToolResult`] - Tool call input and output
//! - [`ToolDefinition`] - Function-calling definition sent to the model
//! - [`AgentProfile`] - Instruction script, model and tool definitions of an agent
//!
//! # Example
//!
//! ```rust
//! use brain_core::{async_trait, ToolExecutor, ToolRequest, ToolResult};
//!
//! struct EchoExecutor;
//!
//! #[async_trait]
//! impl ToolExecutor for EchoExecutor {
//!     async fn execute(&self, request: ToolRequest) -> ToolResult {
//!         match request.arguments.get("message").and_then(|v| v.as_str()) {
//!             Some(message) => ToolResult::success(&request.id, message),
//!             None => ToolResult::error(&request.id, "Missing required argument: message"),
//!         }
//!     }
//!
//!     fn supported_tools(&self) -> Vec<&str> {
//!         vec!["echo"]
//!     }
//! }
//! ```

mod agent;
mod definition;
mod prompt;
mod tools;

pub use agent::{AgentProfile, DEFAULT_MODEL};
pub use definition::{FunctionDefinition, ToolDefinition};
pub use prompt::hash_prompt;
pub use tools::{ToolExecutor, ToolRequest, ToolRequestMeta, ToolResult};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

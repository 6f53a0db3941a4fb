//! Tool registry and execution for the EPP shopper and provider search agents.
//!
//! This crate provides the [`Tool`] trait each agent's tools implement, a
//! [`ToolRegistry`] that dispatches calls by name, and the
//! [`RegistryToolExecutor`] adapter that exposes a registry as a
//! `brain_core::ToolExecutor` for tool calls issued by a hosted model, with
//! optional policy controls.
//!
//! # Example
//!
//! ```rust,ignore
//! use agent_tools::ToolRegistry;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut registry = ToolRegistry::new();
//!     registry.register(MyTool::new());
//!
//!     let result = registry
//!         .execute_json("my_tool", r#"{"message": "hi"}"#)
//!         .await
//!         .unwrap();
//!     println!("{}", result.content);
//! }
//! ```

mod error;
mod executor;
mod registry;
mod tool;

pub use error::ToolError;
pub use executor::{RegistryToolExecutor, ToolPolicy};
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolArgs, ToolOutput};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

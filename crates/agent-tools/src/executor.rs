//! ToolExecutor implementation backed by ToolRegistry.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use brain_core::{ToolExecutor, ToolRequest, ToolResult};
use tokio::time::timeout;
use tracing::warn;

use crate::{ToolOutput, ToolRegistry};

/// Controls which tools an executor will run and how results are shaped.
#[derive(Debug, Clone, Default)]
pub struct ToolPolicy {
    /// If set, only these tools may run.
    pub allowlist: Option<HashSet<String>>,
    /// Upper bound on a single tool execution.
    pub timeout: Option<Duration>,
    /// Wrap results in `{"tool", "success", "content"}` JSON.
    pub format_results_as_json: bool,
}

impl ToolPolicy {
    pub fn allow_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowlist = self.allowlist.get_or_insert_with(HashSet::new);
        for tool in tools {
            allowlist.insert(tool.into());
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_json_results(mut self, enabled: bool) -> Self {
        self.format_results_as_json = enabled;
        self
    }

    fn is_allowed(&self, tool: &str) -> bool {
        self.allowlist
            .as_ref()
            .map_or(true, |allowlist| allowlist.contains(tool))
    }
}

/// Exposes a [`ToolRegistry`] as a [`ToolExecutor`] for model tool calls.
pub struct RegistryToolExecutor {
    registry: Arc<ToolRegistry>,
    policy: ToolPolicy,
}

impl RegistryToolExecutor {
    pub fn new(registry: ToolRegistry) -> Self {
        Self::with_policy(registry, ToolPolicy::default())
    }

    pub fn with_policy(registry: ToolRegistry, policy: ToolPolicy) -> Self {
        Self::from_shared(Arc::new(registry), policy)
    }

    pub fn from_shared(registry: Arc<ToolRegistry>, policy: ToolPolicy) -> Self {
        Self { registry, policy }
    }

    fn format_result(&self, tool: &str, output: &ToolOutput) -> String {
        if self.policy.format_results_as_json {
            serde_json::json!({
                "tool": tool,
                "success": output.success,
                "content": output.content,
            })
            .to_string()
        } else {
            output.content.clone()
        }
    }
}

#[async_trait::async_trait]
impl ToolExecutor for RegistryToolExecutor {
    async fn execute(&self, request: ToolRequest) -> ToolResult {
        let agent = request
            .metadata
            .as_ref()
            .and_then(|m| m.agent.as_deref())
            .unwrap_or("unknown");

        if !self.policy.is_allowed(&request.name) {
            warn!(tool = %request.name, agent, "Tool call blocked by policy");
            return ToolResult::error(&request.id, "Tool not allowed");
        }

        let execute_future = self.registry.execute(&request.name, request.arguments);

        let result = match self.policy.timeout {
            Some(timeout_duration) => match timeout(timeout_duration, execute_future).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(tool = %request.name, agent, "Tool execution timed out");
                    return ToolResult::error(&request.id, "Tool execution timed out");
                }
            },
            None => execute_future.await,
        };

        let output = match result {
            Ok(output) => output,
            Err(error) => {
                warn!(tool = %request.name, agent, %error, "Tool call failed");
                return ToolResult::error(&request.id, error.to_string());
            }
        };

        let formatted = self.format_result(&request.name, &output);
        if output.success {
            ToolResult::success(&request.id, formatted)
        } else {
            ToolResult::failure(&request.id, formatted)
        }
    }

    fn supported_tools(&self) -> Vec<&str> {
        self.registry
            .list_tools()
            .into_iter()
            .filter(|name| self.policy.is_allowed(name))
            .collect()
    }
}

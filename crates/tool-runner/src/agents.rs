//! The agents this runner can host.

use std::fmt;

use agent_tools::{RegistryToolExecutor, ToolPolicy, ToolRegistry};
use brain_core::{AgentProfile, ToolExecutor, ToolRequest, ToolRequestMeta, ToolResult};
use clap::ValueEnum;
use tracing::info;

use crate::config::Config;

/// A hostable agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    /// Neuravibe EPP mobile plan shopper.
    PlanShopper,
    /// In-network provider search and booking.
    ProviderSearch,
}

impl AgentKind {
    pub const ALL: [AgentKind; 2] = [AgentKind::PlanShopper, AgentKind::ProviderSearch];

    fn registry(&self, config: &Config) -> ToolRegistry {
        match self {
            AgentKind::PlanShopper => phoneplan_shopper::agent::registry(&config.shopper),
            AgentKind::ProviderSearch => provider_search::agent::registry(),
        }
    }

    fn profile(&self, registry: &ToolRegistry) -> AgentProfile {
        match self {
            AgentKind::PlanShopper => phoneplan_shopper::agent::profile(registry),
            AgentKind::ProviderSearch => provider_search::agent::profile(registry),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentKind::PlanShopper => f.write_str("plan-shopper"),
            AgentKind::ProviderSearch => f.write_str("provider-search"),
        }
    }
}

/// An agent's profile plus an executor restricted to its tools.
pub struct HostedAgent {
    profile: AgentProfile,
    executor: RegistryToolExecutor,
}

impl HostedAgent {
    pub fn new(kind: AgentKind, config: &Config, json_results: bool) -> Self {
        let registry = kind.registry(config);
        let profile = kind.profile(&registry).with_model(config.model.clone());

        let policy = ToolPolicy::default()
            .allow_tools(profile.tool_names())
            .with_timeout(config.tool_timeout)
            .with_json_results(json_results);

        info!(agent = %profile.name, tools = profile.tools.len(), "Agent ready");

        Self {
            executor: RegistryToolExecutor::with_policy(registry, policy),
            profile,
        }
    }

    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    /// Run one tool call the way a dialogue controller would.
    pub async fn call(&self, tool: &str, args_json: &str) -> Result<ToolResult, serde_json::Error> {
        let request = ToolRequest::from_call(
            uuid::Uuid::new_v4().to_string(),
            tool.to_string(),
            args_json,
        )?
        .with_metadata(ToolRequestMeta {
            agent: Some(self.profile.name.clone()),
            session_id: None,
        });

        Ok(self.executor.execute(request).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config() -> Config {
        let mut config = Config::default();
        config.shopper.approval_delay = Duration::ZERO;
        config
    }

    #[test]
    fn test_profiles_use_configured_model() {
        let mut config = config();
        config.model = "test-model".to_string();

        for kind in AgentKind::ALL {
            let agent = HostedAgent::new(kind, &config, false);
            assert_eq!(agent.profile().model, "test-model");
            assert!(!agent.profile().tools.is_empty());
        }
    }

    #[tokio::test]
    async fn test_plan_shopper_call() {
        let agent = HostedAgent::new(AgentKind::PlanShopper, &config(), false);
        let result = agent
            .call(
                "get_epp_plan_recommendations",
                r#"{"data_usage_category": "Light"}"#,
            )
            .await
            .unwrap();
        assert!(result.success);
        assert!(result.content.contains("Neuravibe EPP Connect 15"));
    }

    #[tokio::test]
    async fn test_unknown_tier_reaches_model_as_error_object() {
        let agent = HostedAgent::new(AgentKind::PlanShopper, &config(), false);
        let result = agent
            .call(
                "get_epp_plan_recommendations",
                r#"{"data_usage_category": "Unlimited"}"#,
            )
            .await
            .unwrap();
        assert!(!result.success);

        let payload: serde_json::Value = serde_json::from_str(&result.content).unwrap();
        assert!(payload["error"]
            .as_str()
            .unwrap()
            .starts_with("Sorry, I don't recognize 'Unlimited'"));
    }

    #[tokio::test]
    async fn test_unknown_tier_in_json_mode_parses() {
        let agent = HostedAgent::new(AgentKind::PlanShopper, &config(), true);
        let result = agent
            .call(
                "get_epp_plan_recommendations",
                r#"{"data_usage_category": "Unlimited"}"#,
            )
            .await
            .unwrap();
        assert!(!result.success);

        let wrapped: serde_json::Value = serde_json::from_str(&result.content).unwrap();
        assert_eq!(wrapped["success"], false);
        let payload: serde_json::Value =
            serde_json::from_str(wrapped["content"].as_str().unwrap()).unwrap();
        assert!(payload.get("error").is_some());
    }

    #[tokio::test]
    async fn test_other_agents_tools_are_not_reachable() {
        let agent = HostedAgent::new(AgentKind::ProviderSearch, &config(), false);
        let result = agent.call("get_device_offers", "{}").await.unwrap();
        assert!(!result.success);
    }

    #[tokio::test]
    async fn test_json_results() {
        let agent = HostedAgent::new(AgentKind::ProviderSearch, &config(), true);
        let result = agent
            .call(
                "book_appointment",
                r#"{"doctor_name": "Dr. A", "doctor_address": "1 Main St", "appointment_slot": "8:00 AM"}"#,
            )
            .await
            .unwrap();

        let wrapped: serde_json::Value = serde_json::from_str(&result.content).unwrap();
        assert_eq!(wrapped["tool"], "book_appointment");
        assert_eq!(wrapped["success"], true);
    }

    #[tokio::test]
    async fn test_bad_arguments_json() {
        let agent = HostedAgent::new(AgentKind::ProviderSearch, &config(), false);
        assert!(agent.call("find_providers", "{not json").await.is_err());
    }
}

//! The plan shopper agent: instruction script, tools and profile.

use agent_tools::ToolRegistry;
use brain_core::AgentProfile;

use crate::config::ShopperConfig;
use crate::discount::ManagerApproval;
use crate::tools::{DeviceOffers, ManagerDiscount, OrderLink, PlanRecommendations};

pub const AGENT_NAME: &str = "TelecomEPPPlanAgent";

pub const AGENT_DESCRIPTION: &str =
    "An AI agent to help Neuravibe employees select discounted mobile plans.";

/// Instruction script steering the hosted model.
pub const INSTRUCTION: &str = r#"You are a friendly, knowledgeable assistant for Neuravibe employees.
You help them choose a mobile plan from our telecom partner through the exclusive
Employee Partner Program (EPP). Always treat the user as a Neuravibe employee who
qualifies for every EPP discount.

What you do:
1.  Greet the user warmly and acknowledge that they are with Neuravibe.
2.  Learn what they need by asking about:
    - how much data they use, which you map to "Light", "Medium" or "Heavy";
    - whether they need international calling;
    - whether they bring their own device (BYOD) or want a new one.
3.  Use your tools to recommend:
    - call `get_epp_plan_recommendations` with their data usage and international needs;
    - if they want a new phone, call `get_device_offers` only after a plan has been recommended.
4.  Present results clearly:
    - give the full plan name, the data amount and the final discounted price;
    - always say explicitly that this is the "Neuravibe EPP discounted price", and mention
      the original price when you have it so the savings are visible;
    - list the plan's key features.
5.  Finish up:
    - once the user is happy with a plan (and optionally a device), call `generate_order_link`
      to create their personal order link;
    - show the link clearly.
6.  Handle problems gracefully:
    - if no plan fits what they asked for (for example a "Super Heavy" plan), say politely
      that you can't find a plan for those needs and offer to try other options;
    - if they ask about something other than mobile plans (home internet, for example),
      explain politely that you can only help with mobile plans.
7.  Discount requests:
    - if the user asks for more discount, first explain that EPP prices are already
      significantly reduced for Neuravibe employees;
    - say that you can't apply further discounts yourself;
    - offer to send a special request to your manager for a one-time courtesy discount;
    - before calling the tool, tell the user you are checking with your manager and that it
      may take a moment;
    - if they agree, call `request_manager_discount` with the current plan details and the
      exact device name if one was selected;
    - when the answer comes back, state the new final price(s) clearly.
"#;

/// Registry holding the plan shopper's four tools.
pub fn registry(config: &ShopperConfig) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(PlanRecommendations::new());
    registry.register(DeviceOffers::new(config.devices_file.clone()));
    registry.register(OrderLink::new(config.order_base_url.clone()));
    registry.register(ManagerDiscount::new(ManagerApproval::new(
        config.approval_delay,
        config.devices_file.clone(),
    )));

    registry
}

/// Profile handed to the dialogue controller.
pub fn profile(registry: &ToolRegistry) -> AgentProfile {
    AgentProfile::new(AGENT_NAME, AGENT_DESCRIPTION, INSTRUCTION).with_tools(registry.definitions())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tools() {
        let registry = registry(&ShopperConfig::default());
        assert_eq!(
            registry.list_tools(),
            vec![
                "get_epp_plan_recommendations",
                "get_device_offers",
                "generate_order_link",
                "request_manager_discount",
            ]
        );
    }

    #[test]
    fn test_instruction_names_every_tool() {
        let registry = registry(&ShopperConfig::default());
        for name in registry.list_tools() {
            assert!(INSTRUCTION.contains(name), "instruction never mentions {}", name);
        }
    }

    #[test]
    fn test_profile() {
        let registry = registry(&ShopperConfig::default());
        let profile = profile(&registry);
        assert_eq!(profile.name, AGENT_NAME);
        assert_eq!(profile.model, brain_core::DEFAULT_MODEL);
        assert_eq!(profile.tools.len(), 4);
        assert_eq!(
            profile.tools[0].function.parameters["properties"]["data_usage_category"]["enum"][2],
            "Heavy"
        );
    }
}

//! Order link tool.

use agent_tools::{async_trait, Tool, ToolArgs, ToolError, ToolOutput};
use serde_json::{json, Value};
use url::Url;

use crate::order::order_link;

/// Builds the portal link that finalizes an order.
///
/// # Parameters
///
/// - `plan_details` (required): the plan object; only `name` is read.
/// - `device_offer` (optional): the chosen device offer text.
pub struct OrderLink {
    base_url: Url,
}

impl OrderLink {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }
}

#[async_trait]
impl Tool for OrderLink {
    fn name(&self) -> &str {
        "generate_order_link"
    }

    fn description(&self) -> &str {
        "Generates a direct link to the telecom's EPP portal to finalize the order \
         for the selected plan and optional device."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "plan_details": {
                    "type": "object",
                    "description": "The selected plan as returned by get_epp_plan_recommendations.",
                    "properties": {
                        "name": {"type": "string"}
                    }
                },
                "device_offer": {
                    "type": "string",
                    "description": "The device offer the user picked, if any."
                }
            },
            "required": ["plan_details"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let plan_name = args.get_nested("plan_details")?.get_string_opt("name")?;
        let device_offer = args.get_string_opt("device_offer")?;

        Ok(ToolOutput::success(order_link(
            &self.base_url,
            plan_name.as_deref(),
            device_offer.as_deref(),
        )))
    }
}

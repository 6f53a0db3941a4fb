//! Manager discount request tool.

use agent_tools::{async_trait, Tool, ToolArgs, ToolError, ToolOutput};
use serde_json::{json, Value};

use crate::discount::{DiscountRequest, ManagerApproval};

/// Asks a (simulated) manager for a one-time courtesy discount.
///
/// Waits for the configured approval delay before answering; the model is
/// instructed to warn the user before calling it.
///
/// # Parameters
///
/// - `plan_details` (required): the plan object; `name` and `price` are read.
/// - `device_name` (optional): exact catalog name of the selected device.
pub struct ManagerDiscount {
    approval: ManagerApproval,
}

impl ManagerDiscount {
    pub fn new(approval: ManagerApproval) -> Self {
        Self { approval }
    }
}

fn discount_request(args: &ToolArgs) -> Result<DiscountRequest, ToolError> {
    let plan = args.get_nested("plan_details")?;

    Ok(DiscountRequest {
        plan_name: plan.get_string("name")?,
        plan_price: plan.get_f64("price")?,
        device_name: args.get_string_opt("device_name")?,
    })
}

#[async_trait]
impl Tool for ManagerDiscount {
    fn name(&self) -> &str {
        "request_manager_discount"
    }

    fn description(&self) -> &str {
        "Submits a request to a manager for an additional one-time discount on a plan \
         and/or device. The manager takes a moment to respond and approves a discount \
         of between 5% and 25%."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "plan_details": {
                    "type": "object",
                    "description": "The current plan, including its name and monthly price.",
                    "properties": {
                        "name": {"type": "string"},
                        "price": {"type": "number"}
                    },
                    "required": ["name", "price"]
                },
                "device_name": {
                    "type": "string",
                    "description": "Exact name of the selected device, if any."
                }
            },
            "required": ["plan_details"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let request = discount_request(&args)?;
        let outcome = self.approval.request(&request).await;
        Ok(ToolOutput::success(outcome.message()))
    }
}

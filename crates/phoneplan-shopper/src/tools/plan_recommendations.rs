//! EPP plan recommendation tool.

use agent_tools::{async_trait, Tool, ToolArgs, ToolError, ToolOutput};
use serde_json::{json, Value};
use tracing::debug;

use crate::plans::recommend_plan;

/// Looks up the EPP plan for a data usage category.
///
/// # Parameters
///
/// - `data_usage_category` (required): `Light`, `Medium` or `Heavy`.
/// - `international_calling` (optional): add the Global Talk package. Defaults to false.
///
/// Returns the plan as JSON. An unknown category is a failed output holding
/// an `{"error": ...}` object.
pub struct PlanRecommendations;

impl PlanRecommendations {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlanRecommendations {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for PlanRecommendations {
    fn name(&self) -> &str {
        "get_epp_plan_recommendations"
    }

    fn description(&self) -> &str {
        "Retrieves the exclusive Employee Partner Program (EPP) mobile plan for Neuravibe \
         employees based on their data usage category and whether they need international calling."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "data_usage_category": {
                    "type": "string",
                    "enum": ["Light", "Medium", "Heavy"],
                    "description": "How much mobile data the user typically uses."
                },
                "international_calling": {
                    "type": "boolean",
                    "description": "Whether the user needs the international calling package.",
                    "default": false
                }
            },
            "required": ["data_usage_category"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let category = args.get_string("data_usage_category")?;
        let international = args.get_bool_or("international_calling", false)?;

        debug!(
            "Recommending plan for '{}' (international: {})",
            category, international
        );

        match recommend_plan(&category, international) {
            Ok(plan) => ToolOutput::json(&plan),
            Err(unknown) => Ok(ToolOutput::failure(unknown.payload().to_string())),
        }
    }
}

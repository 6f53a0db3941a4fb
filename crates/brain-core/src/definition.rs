//! Function-calling definitions handed to the model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool definition in the OpenAI-compatible function-calling format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool type (always "function" for function tools).
    #[serde(rename = "type")]
    pub tool_type: String,
    /// Function specification.
    pub function: FunctionDefinition,
}

/// Function definition for a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// Name of the function.
    pub name: String,
    /// Description of what the function does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for the function parameters.
    pub parameters: Value,
}

impl ToolDefinition {
    /// Create a function tool definition.
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Self {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: name.into(),
                description: Some(description.into()),
                parameters,
            },
        }
    }

    /// The function name.
    pub fn name(&self) -> &str {
        &self.function.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_definition_serializes() {
        let tool = ToolDefinition::function(
            "book_appointment",
            "Books an appointment.",
            serde_json::json!({"type": "object", "properties": {}}),
        );
        assert_eq!(tool.name(), "book_appointment");

        let json = serde_json::to_value(&tool).unwrap();
        assert_eq!(json["type"], "function");
        assert_eq!(json["function"]["name"], "book_appointment");
        assert_eq!(json["function"]["parameters"]["type"], "object");
    }

    #[test]
    fn test_missing_description_skipped() {
        let mut tool = ToolDefinition::function("x", "y", serde_json::json!({}));
        tool.function.description = None;
        let json = serde_json::to_string(&tool).unwrap();
        assert!(!json.contains("description"));
    }
}

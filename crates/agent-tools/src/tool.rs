//! Tool trait definition and types.

use std::collections::HashMap;

use async_trait::async_trait;
use brain_core::ToolDefinition;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ToolError;

/// Arguments passed to a tool for execution.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Parameters as key-value pairs.
    pub params: HashMap<String, Value>,
    /// Dotted path of the enclosing object parameter, used in error names.
    scope: Option<String>,
}

impl ToolArgs {
    /// Create new tool arguments with the given parameters.
    pub fn new(params: HashMap<String, Value>) -> Self {
        Self {
            params,
            scope: None,
        }
    }

    /// Build arguments from a JSON object value.
    ///
    /// Anything other than an object (or null, treated as no arguments) is
    /// rejected.
    pub fn from_value(value: Value) -> Result<Self, ToolError> {
        match value {
            Value::Object(map) => Ok(Self::new(map.into_iter().collect())),
            Value::Null => Ok(Self::default()),
            _ => Err(ToolError::invalid("arguments", "expected a JSON object")),
        }
    }

    /// Full parameter name for errors, e.g. `plan_details.price`.
    fn qualified(&self, key: &str) -> String {
        match &self.scope {
            Some(scope) => format!("{}.{}", scope, key),
            None => key.to_string(),
        }
    }

    /// A present, non-null parameter.
    fn present(&self, key: &str) -> Option<&Value> {
        self.params.get(key).filter(|v| !v.is_null())
    }

    fn require(&self, key: &str) -> Result<&Value, ToolError> {
        self.present(key)
            .ok_or_else(|| ToolError::MissingParameter(self.qualified(key)))
    }

    /// Get a string parameter, returning an error if missing or not a string.
    pub fn get_string(&self, key: &str) -> Result<String, ToolError> {
        self.require(key)?
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ToolError::invalid(self.qualified(key), "expected string"))
    }

    /// Get an optional string parameter.
    ///
    /// Missing and null are both `None`; a non-string value is an error.
    pub fn get_string_opt(&self, key: &str) -> Result<Option<String>, ToolError> {
        match self.present(key) {
            Some(v) => v
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| ToolError::invalid(self.qualified(key), "expected string")),
            None => Ok(None),
        }
    }

    /// Get a string parameter with a default value.
    pub fn get_string_or(&self, key: &str, default: &str) -> Result<String, ToolError> {
        Ok(self
            .get_string_opt(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Get an optional boolean parameter.
    pub fn get_bool_opt(&self, key: &str) -> Result<Option<bool>, ToolError> {
        match self.present(key) {
            Some(v) => v
                .as_bool()
                .map(Some)
                .ok_or_else(|| ToolError::invalid(self.qualified(key), "expected boolean")),
            None => Ok(None),
        }
    }

    /// Get a boolean parameter with a default value.
    pub fn get_bool_or(&self, key: &str, default: bool) -> Result<bool, ToolError> {
        Ok(self.get_bool_opt(key)?.unwrap_or(default))
    }

    /// Get an f64 parameter, returning an error if missing or not a number.
    pub fn get_f64(&self, key: &str) -> Result<f64, ToolError> {
        self.require(key)?
            .as_f64()
            .ok_or_else(|| ToolError::invalid(self.qualified(key), "expected number"))
    }

    /// Get an object parameter as nested arguments.
    ///
    /// Errors raised by the nested getters name the full path, e.g.
    /// `plan_details.price`.
    pub fn get_nested(&self, key: &str) -> Result<ToolArgs, ToolError> {
        let object = self
            .require(key)?
            .as_object()
            .ok_or_else(|| ToolError::invalid(self.qualified(key), "expected object"))?;

        Ok(Self {
            params: object.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            scope: Some(self.qualified(key)),
        })
    }
}

/// Output from a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The result content (text or JSON).
    pub content: String,
    /// Whether the execution was successful.
    pub success: bool,
}

impl ToolOutput {
    /// Create a successful output.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: true,
        }
    }

    /// Create a failed output.
    pub fn failure(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: false,
        }
    }

    /// Create a successful output holding `value` serialized as JSON.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, ToolError> {
        Ok(Self::success(serde_json::to_string(value)?))
    }
}

/// Trait for tools an agent's model can call.
///
/// Tools take a JSON object of arguments and return text or JSON text. The
/// description and parameter schema are what the model sees when deciding
/// whether and how to call the tool.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for dispatch).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// JSON Schema describing the tool's arguments.
    fn parameters(&self) -> Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;

    /// Function-calling definition for this tool.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::function(self.name(), self.description(), self.parameters())
    }
}

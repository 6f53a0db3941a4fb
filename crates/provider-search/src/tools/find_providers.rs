//! Provider search tool.

use agent_tools::{async_trait, Tool, ToolArgs, ToolError, ToolOutput};
use serde_json::{json, Value};
use tracing::debug;

use crate::search::find_providers;

/// Default gender preference when the user gives none.
pub const NO_PREFERENCE: &str = "No Preference";

/// Finds in-network providers by specialty, location and gender preference.
///
/// # Parameters
///
/// - `doctor_type` (required): specialty, e.g. "Primary Care".
/// - `location` (required): city and state, or ZIP code.
/// - `gender` (optional): "Male", "Female" or "No Preference" (default).
///
/// Returns a JSON array of at most three providers. An empty array means no
/// match.
pub struct FindProviders;

impl FindProviders {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FindProviders {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for FindProviders {
    fn name(&self) -> &str {
        "find_providers"
    }

    fn description(&self) -> &str {
        "Finds in-network doctors based on specialty, location and gender preference. \
         Returns up to three providers with name, address and phone number."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "doctor_type": {
                    "type": "string",
                    "description": "The specialty to search for, e.g. 'Primary Care', 'Cardiologist'."
                },
                "location": {
                    "type": "string",
                    "description": "The city and state, or ZIP code, to search in."
                },
                "gender": {
                    "type": "string",
                    "enum": ["Male", "Female", "No Preference"],
                    "description": "Preferred gender of the doctor.",
                    "default": NO_PREFERENCE
                }
            },
            "required": ["doctor_type", "location"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let doctor_type = args.get_string("doctor_type")?;
        let location = args.get_string("location")?;
        let gender = args.get_string_or("gender", NO_PREFERENCE)?;

        let providers = find_providers(&doctor_type, &location, &gender);
        debug!(
            "Found {} provider(s) for '{}' in '{}' ({})",
            providers.len(),
            doctor_type,
            location,
            gender
        );

        ToolOutput::json(&providers)
    }
}

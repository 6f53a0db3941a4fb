//! Appointment slot tool.

use agent_tools::{async_trait, Tool, ToolArgs, ToolError, ToolOutput};
use serde_json::{json, Value};
use tracing::debug;

use crate::slots::suggest_slots;

/// Suggests three open 30-minute slots for today.
///
/// # Parameters
///
/// - `doctor_name` (required)
/// - `doctor_address` (required)
///
/// The schedule is simulated; the doctor is only logged.
pub struct AvailableSlots;

impl AvailableSlots {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AvailableSlots {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for AvailableSlots {
    fn name(&self) -> &str {
        "get_available_slots"
    }

    fn description(&self) -> &str {
        "Gets available 30-minute appointment slots with a doctor for today. \
         Returns three time slots in chronological order."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "doctor_name": {
                    "type": "string",
                    "description": "The doctor's name as returned by find_providers."
                },
                "doctor_address": {
                    "type": "string",
                    "description": "The address of the doctor's office."
                }
            },
            "required": ["doctor_name", "doctor_address"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let doctor_name = args.get_string("doctor_name")?;
        let doctor_address = args.get_string("doctor_address")?;

        let slots = suggest_slots(&mut rand::thread_rng());
        debug!(
            "Slots for {} at {}: {:?}",
            doctor_name, doctor_address, slots
        );

        ToolOutput::json(&slots)
    }
}

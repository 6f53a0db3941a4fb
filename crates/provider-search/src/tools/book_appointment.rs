//! Appointment booking tool.

use agent_tools::{async_trait, Tool, ToolArgs, ToolError, ToolOutput};
use serde_json::{json, Value};
use tracing::info;

use crate::booking::booking_confirmation;

/// Books an appointment and returns the confirmation message.
pub struct BookAppointment;

impl BookAppointment {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BookAppointment {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for BookAppointment {
    fn name(&self) -> &str {
        "book_appointment"
    }

    fn description(&self) -> &str {
        "Books an appointment with a doctor for the chosen time slot today and returns \
         a confirmation message."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "doctor_name": {"type": "string", "description": "The doctor's name."},
                "doctor_address": {"type": "string", "description": "The address of the doctor's office."},
                "appointment_slot": {"type": "string", "description": "The chosen slot, e.g. '9:30 AM'."}
            },
            "required": ["doctor_name", "doctor_address", "appointment_slot"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let doctor_name = args.get_string("doctor_name")?;
        let doctor_address = args.get_string("doctor_address")?;
        let slot = args.get_string("appointment_slot")?;

        info!(doctor = %doctor_name, slot = %slot, "Appointment booked");
        Ok(ToolOutput::success(booking_confirmation(
            &doctor_name,
            &doctor_address,
            &slot,
        )))
    }
}

//! Device offer tool.

use std::path::PathBuf;

use agent_tools::{async_trait, Tool, ToolArgs, ToolError, ToolOutput};
use serde_json::{json, Value};
use tracing::warn;

use crate::devices::{offer_message, DeviceCatalog, CATALOG_UNAVAILABLE};

/// Offers up to three devices the plan is eligible for.
///
/// The catalog file is read on every call, so edits take effect without a
/// restart.
///
/// # Parameters
///
/// - `plan_name` (optional): the recommended plan's name. Without it, or for
///   an unrecognized plan, offers come from the full lineup.
pub struct DeviceOffers {
    devices_file: PathBuf,
}

impl DeviceOffers {
    pub fn new(devices_file: impl Into<PathBuf>) -> Self {
        Self {
            devices_file: devices_file.into(),
        }
    }
}

#[async_trait]
impl Tool for DeviceOffers {
    fn name(&self) -> &str {
        "get_device_offers"
    }

    fn description(&self) -> &str {
        "Provides details on device offers available with a specific EPP mobile plan. \
         Can also be called without a plan for general device offers."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "plan_name": {
                    "type": "string",
                    "description": "Full name of the recommended plan, e.g. 'Neuravibe EPP Power 50'."
                }
            }
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let plan_name = args.get_string_opt("plan_name")?;

        let catalog = match DeviceCatalog::load(&self.devices_file).await {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Device offers unavailable: {}", e);
                return Ok(ToolOutput::failure(CATALOG_UNAVAILABLE));
            }
        };

        let message = offer_message(&catalog, plan_name.as_deref(), &mut rand::thread_rng());
        Ok(ToolOutput::success(message))
    }
}

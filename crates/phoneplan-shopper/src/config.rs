//! Configuration for the plan shopper tools.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Device catalog bundled with the crate.
pub const DEFAULT_DEVICES_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/devices.json");

/// EPP portal order endpoint.
pub const DEFAULT_ORDER_BASE_URL: &str = "https://epp.neuravibe-telecom-partner.com/order";

/// Simulated time a manager takes to approve a discount.
pub const DEFAULT_APPROVAL_DELAY_MS: u64 = 3000;

/// Configuration for the plan shopper tools.
#[derive(Debug, Clone)]
pub struct ShopperConfig {
    /// Path of the JSON device catalog, read on every call that needs it.
    pub devices_file: PathBuf,

    /// Base URL order links are built on.
    pub order_base_url: Url,

    /// Artificial delay before a manager discount is decided.
    pub approval_delay: Duration,
}

impl Default for ShopperConfig {
    fn default() -> Self {
        Self {
            devices_file: PathBuf::from(DEFAULT_DEVICES_FILE),
            order_base_url: default_order_base_url(),
            approval_delay: Duration::from_millis(DEFAULT_APPROVAL_DELAY_MS),
        }
    }
}

impl ShopperConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `PHONEPLAN_DEVICES_FILE` | Device catalog path | bundled `data/devices.json` |
    /// | `PHONEPLAN_ORDER_BASE_URL` | Order portal URL | `https://epp.neuravibe-telecom-partner.com/order` |
    /// | `PHONEPLAN_APPROVAL_DELAY_MS` | Manager approval delay | `3000` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let devices_file = env::var("PHONEPLAN_DEVICES_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DEVICES_FILE));

        let order_base_url = match env::var("PHONEPLAN_ORDER_BASE_URL") {
            Ok(raw) => Url::parse(&raw).map_err(|_| ConfigError::InvalidOrderBaseUrl(raw))?,
            Err(_) => default_order_base_url(),
        };

        let approval_delay = match env::var("PHONEPLAN_APPROVAL_DELAY_MS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidApprovalDelay(raw))?,
            Err(_) => Duration::from_millis(DEFAULT_APPROVAL_DELAY_MS),
        };

        Ok(Self {
            devices_file,
            order_base_url,
            approval_delay,
        })
    }

    /// Set the device catalog path.
    pub fn with_devices_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.devices_file = path.into();
        self
    }

    /// Set the order portal URL.
    pub fn with_order_base_url(mut self, url: Url) -> Self {
        self.order_base_url = url;
        self
    }

    /// Set the manager approval delay.
    pub fn with_approval_delay(mut self, delay: Duration) -> Self {
        self.approval_delay = delay;
        self
    }
}

fn default_order_base_url() -> Url {
    // Constant input; parsing cannot fail.
    Url::parse(DEFAULT_ORDER_BASE_URL).expect("default order URL is valid")
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PHONEPLAN_ORDER_BASE_URL is not a valid URL: {0}")]
    InvalidOrderBaseUrl(String),

    #[error("PHONEPLAN_APPROVAL_DELAY_MS must be a whole number of milliseconds, got {0:?}")]
    InvalidApprovalDelay(String),
}

//! Configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use brain_core::DEFAULT_MODEL;
use phoneplan_shopper::ShopperConfig;

const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 30;

/// Runner configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Model named in agent profiles.
    pub model: String,
    /// Upper bound on one tool call.
    pub tool_timeout: Duration,
    /// Plan shopper tool settings.
    pub shopper: ShopperConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            tool_timeout: Duration::from_secs(DEFAULT_TOOL_TIMEOUT_SECS),
            shopper: ShopperConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `AGENT_MODEL` | Model named in agent profiles | `gemini-2.5-flash` |
    /// | `TOOL_TIMEOUT_SECS` | Per-call timeout | `30` |
    ///
    /// Plan shopper settings come from [`ShopperConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let model = env::var("AGENT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let tool_timeout = match env::var("TOOL_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            Err(_) => Duration::from_secs(DEFAULT_TOOL_TIMEOUT_SECS),
        };

        Ok(Self {
            model,
            tool_timeout,
            shopper: ShopperConfig::from_env()?,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOOL_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),

    #[error(transparent)]
    Shopper(#[from] phoneplan_shopper::ConfigError),
}

//! EPP mobile plan shopper tools.
//!
//! Mock tool layer for an agent that helps Neuravibe employees pick a mobile
//! plan under the Employee Partner Program (EPP). The hosted model calls four
//! tools:
//!
//! - `get_epp_plan_recommendations` - plan for a Light/Medium/Heavy usage tier,
//!   optionally with the Global Talk add-on ([`plans`])
//! - `get_device_offers` - up to three eligible devices from the JSON catalog
//!   ([`devices`])
//! - `generate_order_link` - deterministic portal link ([`order`])
//! - `request_manager_discount` - delayed, randomized courtesy discount
//!   ([`discount`])
//!
//! # Example
//!
//! ```rust,no_run
//! use phoneplan_shopper::{agent, ShopperConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ShopperConfig::from_env()?;
//!     let registry = agent::registry(&config);
//!
//!     let output = registry
//!         .execute_json("get_epp_plan_recommendations", r#"{"data_usage_category": "Medium"}"#)
//!         .await?;
//!     println!("{}", output.content);
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod config;
pub mod devices;
pub mod discount;
pub mod order;
pub mod plans;
pub mod tools;

pub use config::{ConfigError, ShopperConfig};
pub use devices::{CatalogError, Device, DeviceCatalog, DeviceTier};
pub use plans::{Plan, UnknownUsageTier, UsageTier};

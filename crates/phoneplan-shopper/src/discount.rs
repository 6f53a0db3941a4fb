//! Simulated manager approval of a one-time courtesy discount.

use std::path::PathBuf;
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::devices::{format_price, DeviceCatalog};

/// Discounts a manager may approve, in percent.
pub const DISCOUNT_PERCENTAGES: [u32; 5] = [5, 10, 15, 20, 25];

const DEVICE_DISCOUNT_FAILED: &str =
    "I had some trouble applying the discount to the device, but your plan discount is confirmed.";

/// What the model asks the manager to discount.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountRequest {
    pub plan_name: String,
    /// Current monthly plan price.
    pub plan_price: f64,
    /// Device to discount as well, matched by exact catalog name.
    pub device_name: Option<String>,
}

/// How the device part of a request was settled.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceDiscount {
    NotRequested,
    Applied { name: String, new_price: f64 },
    /// The device is not in the catalog; nothing is said about it.
    NotFound,
    CatalogUnavailable,
}

/// The manager's decision.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountOutcome {
    pub percent: u32,
    pub plan_name: String,
    pub new_plan_price: f64,
    pub device: DeviceDiscount,
}

impl DiscountOutcome {
    /// The reply relayed to the customer.
    pub fn message(&self) -> String {
        let mut parts = vec![
            format!(
                "Great news! My manager has approved an additional {}% discount for you.",
                self.percent
            ),
            format!(
                "Your new discounted price for the {} is now {}/month.",
                self.plan_name,
                format_price(self.new_plan_price)
            ),
        ];

        match &self.device {
            DeviceDiscount::Applied { name, new_price } => parts.push(format!(
                "The {} will now be an additional {}/month.",
                name,
                format_price(*new_price)
            )),
            DeviceDiscount::CatalogUnavailable => parts.push(DEVICE_DISCOUNT_FAILED.to_string()),
            DeviceDiscount::NotRequested | DeviceDiscount::NotFound => {}
        }

        parts.join(" ")
    }
}

/// Round to whole cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Apply a percentage discount, rounded to cents.
pub fn apply_discount(price: f64, percent: u32) -> f64 {
    round_cents(price * (1.0 - f64::from(percent) / 100.0))
}

/// Pick one of [`DISCOUNT_PERCENTAGES`] uniformly.
pub fn pick_discount<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    *DISCOUNT_PERCENTAGES
        .choose(rng)
        .unwrap_or(&DISCOUNT_PERCENTAGES[0])
}

/// A manager that takes a while and then approves a random discount.
#[derive(Debug, Clone)]
pub struct ManagerApproval {
    delay: Duration,
    devices_file: PathBuf,
}

impl ManagerApproval {
    pub fn new(delay: Duration, devices_file: impl Into<PathBuf>) -> Self {
        Self {
            delay,
            devices_file: devices_file.into(),
        }
    }

    /// Wait for the manager, then settle the request with a random discount.
    pub async fn request(&self, request: &DiscountRequest) -> DiscountOutcome {
        debug!("Waiting {:?} for manager approval", self.delay);
        sleep(self.delay).await;

        let percent = pick_discount(&mut rand::thread_rng());
        info!(percent, plan = %request.plan_name, "Manager approved discount");
        self.settle(request, percent).await
    }

    /// Apply `percent` to the plan and, if requested, the device.
    pub async fn settle(&self, request: &DiscountRequest, percent: u32) -> DiscountOutcome {
        let device = match request.device_name.as_deref().filter(|n| !n.is_empty()) {
            None => DeviceDiscount::NotRequested,
            Some(name) => match DeviceCatalog::load(&self.devices_file).await {
                Ok(catalog) => match catalog.find(name) {
                    Some(device) => DeviceDiscount::Applied {
                        name: device.name.clone(),
                        new_price: apply_discount(device.monthly_price, percent),
                    },
                    None => {
                        debug!("Device '{}' not in catalog, plan discount only", name);
                        DeviceDiscount::NotFound
                    }
                },
                Err(e) => {
                    warn!("Device discount skipped: {}", e);
                    DeviceDiscount::CatalogUnavailable
                }
            },
        };

        DiscountOutcome {
            percent,
            plan_name: request.plan_name.clone(),
            new_plan_price: apply_discount(request.plan_price, percent),
            device,
        }
    }
}

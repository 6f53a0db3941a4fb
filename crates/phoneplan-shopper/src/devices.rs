//! Device catalog and plan-based device offers.

use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Most devices offered in one answer.
pub const MAX_OFFERS: usize = 3;

/// Reply when the catalog cannot be read.
pub const CATALOG_UNAVAILABLE: &str =
    "I'm sorry, I'm having trouble fetching device offers at the moment.";

/// Reply when no catalog device is eligible for the plan.
pub const NO_ELIGIBLE_DEVICES: &str = "I couldn't find any specific device offers for that plan \
     right now, but we have many great options available.";

const ALL_TIERS: &[DeviceTier] = &[DeviceTier::Premium, DeviceTier::HighEnd, DeviceTier::MidRange];

/// Price tier of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceTier {
    Premium,
    HighEnd,
    MidRange,
    /// Any tier string the catalog uses that no plan is eligible for.
    #[serde(other)]
    Other,
}

/// A phone from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub tier: DeviceTier,
    /// Monthly add-on price on top of the plan.
    pub monthly_price: f64,
}

/// Errors loading the device catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read device catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed device catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The device catalog file: `{"devices": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceCatalog {
    pub devices: Vec<Device>,
}

impl DeviceCatalog {
    /// Read and parse the catalog at `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_json(&content)?;
        debug!(
            "Loaded {} devices from {}",
            catalog.devices.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Find a device by exact name.
    pub fn find(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.name == name)
    }

    /// Devices whose tier is in `tiers`, in catalog order.
    pub fn in_tiers(&self, tiers: &[DeviceTier]) -> Vec<&Device> {
        self.devices
            .iter()
            .filter(|d| tiers.contains(&d.tier))
            .collect()
    }
}

/// Which device tiers a plan unlocks, and how to introduce them.
#[derive(Debug, Clone, PartialEq)]
pub struct Eligibility {
    pub tiers: &'static [DeviceTier],
    pub intro: String,
}

/// Derive device eligibility from the plan name.
///
/// Checked in order: "Ultimate" unlocks every tier, "Power" high-end and
/// mid-range, "Connect" mid-range only. Anything else, including no plan,
/// falls back to the full catalog.
pub fn eligibility(plan_name: Option<&str>) -> Eligibility {
    let plan_name = plan_name.filter(|name| !name.is_empty());

    match plan_name {
        Some(name) if name.contains("Ultimate") => Eligibility {
            tiers: ALL_TIERS,
            intro: format!(
                "With the {}, you're eligible for our full range of devices, from premium to affordable:",
                name
            ),
        },
        Some(name) if name.contains("Power") => Eligibility {
            tiers: &[DeviceTier::HighEnd, DeviceTier::MidRange],
            intro: format!("The {} comes with some great high-end device offers:", name),
        },
        Some(name) if name.contains("Connect") => Eligibility {
            tiers: &[DeviceTier::MidRange],
            intro: format!(
                "For the {}, we have some excellent and affordable devices for you:",
                name
            ),
        },
        _ => Eligibility {
            tiers: ALL_TIERS,
            intro: "We have great deals on a wide range of phones, and here are a few options \
                    from our full lineup:"
                .to_string(),
        },
    }
}

/// Pick up to [`MAX_OFFERS`] eligible devices uniformly at random.
pub fn select_offers<'a, R: Rng + ?Sized>(
    catalog: &'a DeviceCatalog,
    eligibility: &Eligibility,
    rng: &mut R,
) -> Vec<&'a Device> {
    catalog
        .in_tiers(eligibility.tiers)
        .choose_multiple(rng, MAX_OFFERS)
        .copied()
        .collect()
}

/// Format a price in dollars with cents.
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Build the device offer reply for a plan.
pub fn offer_message<R: Rng + ?Sized>(
    catalog: &DeviceCatalog,
    plan_name: Option<&str>,
    rng: &mut R,
) -> String {
    let eligibility = eligibility(plan_name);
    let offers = select_offers(catalog, &eligibility, rng);

    if offers.is_empty() {
        return NO_ELIGIBLE_DEVICES.to_string();
    }

    let lines: Vec<String> = offers
        .iter()
        .map(|device| {
            format!(
                "- The {} for an additional {}/month.",
                device.name,
                format_price(device.monthly_price)
            )
        })
        .collect();

    format!("{}\n{}", eligibility.intro, lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use std::io::Write;

    fn catalog() -> DeviceCatalog {
        DeviceCatalog::from_json(
            r#"{"devices": [
                {"name": "Flagship Max", "tier": "premium", "monthly_price": 41.67},
                {"name": "Flagship", "tier": "premium", "monthly_price": 38.0},
                {"name": "Mainline Pro", "tier": "high-end", "monthly_price": 30.0},
                {"name": "Mainline", "tier": "high-end", "monthly_price": 27.5},
                {"name": "Budget A", "tier": "mid-range", "monthly_price": 15.0},
                {"name": "Budget B", "tier": "mid-range", "monthly_price": 12.5},
                {"name": "Budget C", "tier": "mid-range", "monthly_price": 10.0},
                {"name": "Budget D", "tier": "mid-range", "monthly_price": 9.0},
                {"name": "Refurb", "tier": "refurbished", "monthly_price": 5.0}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_unknown_tier_parses_as_other() {
        let catalog = catalog();
        assert_eq!(catalog.find("Refurb").unwrap().tier, DeviceTier::Other);
        assert_eq!(catalog.find("Mainline").unwrap().tier, DeviceTier::HighEnd);
        assert!(catalog.find("mainline").is_none());
    }

    #[test]
    fn test_eligibility_by_plan_name() {
        assert_eq!(
            eligibility(Some("Neuravibe EPP Ultimate 100")).tiers,
            ALL_TIERS
        );
        assert_eq!(
            eligibility(Some("Neuravibe EPP Power 50 with Global Talk")).tiers,
            &[DeviceTier::HighEnd, DeviceTier::MidRange]
        );
        assert_eq!(
            eligibility(Some("Neuravibe EPP Connect 15")).tiers,
            &[DeviceTier::MidRange]
        );
        assert_eq!(eligibility(Some("Family Share")).tiers, ALL_TIERS);
        assert_eq!(eligibility(None).tiers, ALL_TIERS);
        assert_eq!(eligibility(Some("")).tiers, ALL_TIERS);
    }

    #[test]
    fn test_ultimate_checked_before_power() {
        let e = eligibility(Some("Ultimate Power Connect"));
        assert_eq!(e.tiers, ALL_TIERS);
        assert!(e.intro.starts_with("With the Ultimate Power Connect"));
    }

    #[test]
    fn test_offers_respect_tiers_and_limit() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let e = eligibility(Some("Neuravibe EPP Connect 15"));
            let offers = select_offers(&catalog, &e, &mut rng);
            assert_eq!(offers.len(), MAX_OFFERS);
            assert!(offers.iter().all(|d| d.tier == DeviceTier::MidRange));

            let names: HashSet<&str> = offers.iter().map(|d| d.name.as_str()).collect();
            assert_eq!(names.len(), offers.len());
        }
    }

    #[test]
    fn test_offers_never_include_other_tier() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let offers = select_offers(&catalog, &eligibility(None), &mut rng);
            assert!(offers.iter().all(|d| d.tier != DeviceTier::Other));
        }
    }

    #[test]
    fn test_fewer_than_three_eligible() {
        let catalog = DeviceCatalog::from_json(
            r#"{"devices": [{"name": "Solo", "tier": "high-end", "monthly_price": 20.0}]}"#,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let message = offer_message(&catalog, Some("Neuravibe EPP Power 50"), &mut rng);
        assert_eq!(
            message,
            "The Neuravibe EPP Power 50 comes with some great high-end device offers:\n\
             - The Solo for an additional $20.00/month."
        );
    }

    #[test]
    fn test_no_eligible_devices() {
        let catalog = DeviceCatalog::from_json(
            r#"{"devices": [{"name": "Solo", "tier": "premium", "monthly_price": 20.0}]}"#,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let message = offer_message(&catalog, Some("Neuravibe EPP Connect 15"), &mut rng);
        assert_eq!(message, NO_ELIGIBLE_DEVICES);
    }

    #[test]
    fn test_offer_message_layout() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(3);

        let message = offer_message(&catalog, None, &mut rng);
        let mut lines = message.lines();
        assert!(lines
            .next()
            .unwrap()
            .starts_with("We have great deals on a wide range of phones"));
        let offers: Vec<&str> = lines.collect();
        assert_eq!(offers.len(), 3);
        assert!(offers
            .iter()
            .all(|l| l.starts_with("- The ") && l.ends_with("/month.")));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(30.0), "$30.00");
        assert_eq!(format_price(41.666), "$41.67");
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"devices": [{{"name": "Solo", "tier": "mid-range", "monthly_price": 9.5}}]}}"#
        )
        .unwrap();

        let catalog = DeviceCatalog::load(file.path()).await.unwrap();
        assert_eq!(catalog.devices.len(), 1);
        assert_eq!(catalog.devices[0].monthly_price, 9.5);
    }

    #[tokio::test]
    async fn test_load_errors() {
        let missing = DeviceCatalog::load("/nonexistent/devices.json").await;
        assert!(matches!(missing, Err(CatalogError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"phones\": []}}").unwrap();
        let malformed = DeviceCatalog::load(file.path()).await;
        assert!(matches!(malformed, Err(CatalogError::Parse(_))));
    }

    #[tokio::test]
    async fn test_bundled_catalog_loads() {
        let catalog = DeviceCatalog::load(crate::config::DEFAULT_DEVICES_FILE)
            .await
            .unwrap();
        assert!(!catalog.in_tiers(&[DeviceTier::Premium]).is_empty());
        assert!(!catalog.in_tiers(&[DeviceTier::HighEnd]).is_empty());
        assert!(catalog.in_tiers(&[DeviceTier::MidRange]).len() >= MAX_OFFERS);
    }
}

//! EPP plan table and recommendations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Monthly fee of the Global Talk international add-on.
pub const INTERNATIONAL_ADD_ON_PRICE: f64 = 10.0;

const INTERNATIONAL_SUFFIX: &str = " with Global Talk";
const INTERNATIONAL_FEATURE: &str = "Preferred International Rates";

/// How much data a customer uses, as classified by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsageTier {
    Light,
    Medium,
    Heavy,
}

impl UsageTier {
    pub const ALL: [UsageTier; 3] = [UsageTier::Light, UsageTier::Medium, UsageTier::Heavy];

    pub fn as_str(&self) -> &'static str {
        match self {
            UsageTier::Light => "Light",
            UsageTier::Medium => "Medium",
            UsageTier::Heavy => "Heavy",
        }
    }
}

impl fmt::Display for UsageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsageTier {
    type Err = UnknownUsageTier;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UsageTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| UnknownUsageTier(s.to_string()))
    }
}

/// A usage category outside Light/Medium/Heavy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Sorry, I don't recognize '{0}' as a valid data usage category. \
     Please choose from Light, Medium, or Heavy."
)]
pub struct UnknownUsageTier(pub String);

impl UnknownUsageTier {
    /// The `{"error": ...}` object handed back to the model.
    pub fn payload(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

/// A mobile plan with EPP pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub data_gb: u32,
    /// EPP discounted monthly price.
    pub price: f64,
    /// Retail monthly price before the EPP discount.
    pub original_price: f64,
    pub features: Vec<String>,
}

impl Plan {
    /// The EPP plan offered for a usage tier.
    pub fn for_tier(tier: UsageTier) -> Self {
        let (name, data_gb, price, original_price, features) = match tier {
            UsageTier::Light => (
                "Neuravibe EPP Connect 15",
                15,
                45.0,
                55.0,
                vec!["Unlimited Talk & Text", "5G Access"],
            ),
            UsageTier::Medium => (
                "Neuravibe EPP Power 50",
                50,
                60.0,
                75.0,
                vec!["Unlimited Talk & Text", "5G+ Speeds", "Hotspot Access"],
            ),
            UsageTier::Heavy => (
                "Neuravibe EPP Ultimate 100",
                100,
                75.0,
                90.0,
                vec![
                    "Unlimited Talk & Text",
                    "5G+ Speeds",
                    "15GB Hotspot",
                    "HD Streaming",
                ],
            ),
        };

        Self {
            name: name.to_string(),
            data_gb,
            price,
            original_price,
            features: features.into_iter().map(String::from).collect(),
        }
    }

    /// Add the Global Talk package. The original price stays the retail
    /// price of the base plan.
    pub fn with_international(mut self) -> Self {
        self.name.push_str(INTERNATIONAL_SUFFIX);
        self.price += INTERNATIONAL_ADD_ON_PRICE;
        self.features.push(INTERNATIONAL_FEATURE.to_string());
        self
    }
}

/// Look up the plan for a usage category named by the model.
pub fn recommend_plan(category: &str, international: bool) -> Result<Plan, UnknownUsageTier> {
    let plan = Plan::for_tier(category.parse()?);
    Ok(if international {
        plan.with_international()
    } else {
        plan
    })
}

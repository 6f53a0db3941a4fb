//! Order links into the EPP portal.

use url::Url;

/// Plan identifier used when the plan details carry no name.
pub const CUSTOM_PLAN_ID: &str = "customplan";

/// Build the portal link for a plan and an optional device offer.
///
/// The plan id is the alphanumeric characters of the plan name, lowercased.
/// A device offer mentioning "Pro model" maps to `prophone`; any other
/// non-empty offer maps to `latestphone`.
pub fn order_link(base_url: &Url, plan_name: Option<&str>, device_offer: Option<&str>) -> String {
    let plan_id = plan_name.map_or_else(|| CUSTOM_PLAN_ID.to_string(), plan_id);

    let mut url = base_url.clone();
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("plan", &plan_id);
        if let Some(offer) = device_offer.filter(|o| !o.is_empty()) {
            query.append_pair("device", device_id(offer));
        }
    }
    url.to_string()
}

fn plan_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn device_id(offer: &str) -> &'static str {
    if offer.contains("Pro model") {
        "prophone"
    } else {
        "latestphone"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ORDER_BASE_URL;

    fn base() -> Url {
        Url::parse(DEFAULT_ORDER_BASE_URL).unwrap()
    }

    #[test]
    fn test_plan_only() {
        assert_eq!(
            order_link(&base(), Some("Neuravibe EPP Connect 15"), None),
            "https://epp.neuravibe-telecom-partner.com/order?plan=neuravibeeppconnect15"
        );
    }

    #[test]
    fn test_international_plan_name() {
        assert_eq!(
            order_link(&base(), Some("Neuravibe EPP Power 50 with Global Talk"), None),
            "https://epp.neuravibe-telecom-partner.com/order?plan=neuravibeepppower50withglobaltalk"
        );
    }

    #[test]
    fn test_device_ids() {
        let link = order_link(
            &base(),
            Some("Neuravibe EPP Ultimate 100"),
            Some("The latest Pro model with 256GB"),
        );
        assert!(link.ends_with("?plan=neuravibeeppultimate100&device=prophone"));

        let link = order_link(&base(), Some("Neuravibe EPP Ultimate 100"), Some("Pixel 9"));
        assert!(link.ends_with("&device=latestphone"));

        let link = order_link(&base(), Some("Neuravibe EPP Ultimate 100"), Some(""));
        assert!(!link.contains("device="));
    }

    #[test]
    fn test_missing_plan_name() {
        assert_eq!(
            order_link(&base(), None, None),
            "https://epp.neuravibe-telecom-partner.com/order?plan=customplan"
        );
    }

    #[test]
    fn test_deterministic() {
        let a = order_link(&base(), Some("Neuravibe EPP Power 50"), Some("Galaxy S25"));
        let b = order_link(&base(), Some("Neuravibe EPP Power 50"), Some("Galaxy S25"));
        assert_eq!(a, b);
    }
}

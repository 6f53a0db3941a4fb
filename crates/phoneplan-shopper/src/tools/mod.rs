//! Tools exposed to the plan shopper's model.

mod device_offers;
mod manager_discount;
mod order_link;
mod plan_recommendations;

pub use device_offers::DeviceOffers;
pub use manager_discount::ManagerDiscount;
pub use order_link::OrderLink;
pub use plan_recommendations::PlanRecommendations;

//! In-network provider search tools.
//!
//! Mock tool layer for an agent that helps insurance members find a doctor
//! and book an appointment. The hosted model calls three tools:
//!
//! - `find_providers` - filter the static [`directory`] by specialty,
//!   location and gender ([`search`])
//! - `get_available_slots` - three random half-hour slots for today
//!   ([`slots`])
//! - `book_appointment` - canned confirmation ([`booking`])

pub mod agent;
pub mod booking;
pub mod directory;
pub mod search;
pub mod slots;
pub mod tools;

pub use directory::{Gender, Provider, PROVIDERS};
pub use search::find_providers;

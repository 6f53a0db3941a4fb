//! Tools exposed to the provider search model.

mod available_slots;
mod book_appointment;
mod find_providers;

pub use available_slots::AvailableSlots;
pub use book_appointment::BookAppointment;
pub use find_providers::FindProviders;

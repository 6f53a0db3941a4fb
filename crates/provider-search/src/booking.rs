//! Appointment booking.

/// Confirmation for a booked appointment. Nothing is recorded.
pub fn booking_confirmation(doctor_name: &str, doctor_address: &str, slot: &str) -> String {
    format!(
        "Your appointment with {} at {} for {} today has been successfully booked.",
        doctor_name, doctor_address, slot
    )
}

//! Appointment slot suggestions.

use chrono::NaiveTime;
use rand::seq::SliceRandom;
use rand::Rng;

/// First bookable slot, in minutes after midnight (8:00 AM).
pub const OPENING_MINUTE: u32 = 8 * 60;

/// End of the bookable window, exclusive (4:00 PM).
pub const CLOSING_MINUTE: u32 = 16 * 60;

/// Slot length in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// Slots suggested per query.
pub const SUGGESTED_SLOTS: usize = 3;

/// Every slot start in the daily window.
pub fn candidate_slots() -> Vec<NaiveTime> {
    (OPENING_MINUTE..CLOSING_MINUTE)
        .step_by(SLOT_MINUTES as usize)
        .filter_map(|minute| NaiveTime::from_hms_opt(minute / 60, minute % 60, 0))
        .collect()
}

/// Format a slot for display, e.g. `9:30 AM`.
pub fn format_slot(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Sample [`SUGGESTED_SLOTS`] distinct slots, in chronological order.
pub fn suggest_slots<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let candidates = candidate_slots();
    let mut picked: Vec<NaiveTime> = candidates
        .choose_multiple(rng, SUGGESTED_SLOTS)
        .copied()
        .collect();
    picked.sort();
    picked.into_iter().map(format_slot).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_candidate_window() {
        let candidates = candidate_slots();
        assert_eq!(candidates.len(), 16);
        assert_eq!(format_slot(candidates[0]), "8:00 AM");
        assert_eq!(format_slot(candidates[9]), "12:30 PM");
        assert_eq!(format_slot(candidates[15]), "3:30 PM");
    }

    #[test]
    fn test_suggestions_sorted_and_distinct() {
        let mut rng = StdRng::seed_from_u64(5);
        let all: Vec<String> = candidate_slots().into_iter().map(format_slot).collect();

        for _ in 0..100 {
            let slots = suggest_slots(&mut rng);
            assert_eq!(slots.len(), SUGGESTED_SLOTS);

            let positions: Vec<usize> = slots
                .iter()
                .map(|s| all.iter().position(|c| c == s).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_slots_on_the_half_hour() {
        for time in candidate_slots() {
            assert_eq!(time.minute() % SLOT_MINUTES, 0);
            assert!(time.hour() >= 8 && time.hour() < 16);
        }
    }
}

//! Provider search over the static directory.

use crate::directory::{Gender, Provider, PROVIDERS};

/// Most providers returned by one search.
pub const MAX_RESULTS: usize = 3;

/// Whether a free-form location falls inside the covered area.
///
/// The directory only lists Boston, so a location matches when it names
/// Boston (any case) or contains a 021xx ZIP prefix.
pub fn location_covered(location: &str) -> bool {
    location.to_lowercase().contains("boston") || location.contains("021")
}

/// Find up to [`MAX_RESULTS`] providers, in directory order.
///
/// The specialty must match exactly, ignoring case. `gender` is a preference
/// string; see [`Gender::preference`].
pub fn find_providers(doctor_type: &str, location: &str, gender: &str) -> Vec<&'static Provider> {
    if !location_covered(location) {
        return Vec::new();
    }

    let wanted = doctor_type.to_lowercase();
    let preference = Gender::preference(gender);

    PROVIDERS
        .iter()
        .filter(|p| p.specialty.to_lowercase() == wanted)
        .filter(|p| preference.map_or(true, |g| p.gender == g))
        .take(MAX_RESULTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(providers: &[&Provider]) -> Vec<&'static str> {
        providers.iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_specialty_case_insensitive() {
        let found = find_providers("cardiologist", "Boston, MA", "No Preference");
        assert_eq!(names(&found), vec!["Dr. Michael Brown", "Dr. Sarah Davis"]);
    }

    #[test]
    fn test_gender_filter() {
        let found = find_providers("Primary Care", "boston", "female");
        assert_eq!(names(&found), vec!["Dr. Jane Doe"]);

        let found = find_providers("Primary Care", "boston", "Male");
        assert_eq!(names(&found), vec!["Dr. John Smith"]);
    }

    #[test]
    fn test_zip_code_location() {
        let found = find_providers("Dermatologist", "02116", "No Preference");
        assert_eq!(names(&found), vec!["Dr. Emily White"]);
    }

    #[test]
    fn test_outside_area() {
        assert!(find_providers("Cardiologist", "Chicago, IL", "No Preference").is_empty());
        assert!(find_providers("Cardiologist", "60601", "No Preference").is_empty());
    }

    #[test]
    fn test_specialty_must_match_exactly() {
        assert!(find_providers("Cardio", "Boston", "No Preference").is_empty());
        assert!(find_providers("Dentist", "Boston", "No Preference").is_empty());
    }

    #[test]
    fn test_results_capped() {
        for specialty in crate::directory::specialties() {
            let found = find_providers(specialty, "Boston, MA", "No Preference");
            assert!(!found.is_empty());
            assert!(found.len() <= MAX_RESULTS);
        }
    }
}

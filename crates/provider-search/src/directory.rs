//! Static directory of in-network providers.

use std::fmt;

use serde::Serialize;

/// A provider's gender, as listed in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Case-insensitive, exact parse of a gender preference. Anything other
    /// than "male" or "female" (such as "No Preference") means no preference.
    pub fn preference(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("Male"),
            Gender::Female => f.write_str("Female"),
        }
    }
}

/// An in-network provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provider {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub specialty: &'static str,
    pub location: &'static str,
    pub gender: Gender,
    pub address: &'static str,
    pub phone: &'static str,
}

const fn provider(
    name: &'static str,
    specialty: &'static str,
    gender: Gender,
    address: &'static str,
    phone: &'static str,
) -> Provider {
    Provider {
        name,
        specialty,
        location: "Boston, MA",
        gender,
        address,
        phone,
    }
}

/// Every in-network provider, in listing order.
pub static PROVIDERS: [Provider; 23] = [
    provider(
        "Dr. Jane Doe",
        "Primary Care",
        Gender::Female,
        "123 Beacon St, Boston, MA 02116",
        "617-555-1234",
    ),
    provider(
        "Dr. John Smith",
        "Primary Care",
        Gender::Male,
        "456 Commonwealth Ave, Boston, MA 02215",
        "617-555-5678",
    ),
    provider(
        "Dr. Emily White",
        "Dermatologist",
        Gender::Female,
        "789 Newbury St, Boston, MA 02116",
        "617-555-9012",
    ),
    provider(
        "Dr. Michael Brown",
        "Cardiologist",
        Gender::Male,
        "100 Medical Center Dr, Boston, MA 02118",
        "617-555-1111",
    ),
    provider(
        "Dr. Sarah Davis",
        "Cardiologist",
        Gender::Female,
        "200 Health St, Boston, MA 02130",
        "617-555-2222",
    ),
    provider(
        "Dr. David Wilson",
        "Neurologist",
        Gender::Male,
        "300 Brainy Way, Boston, MA 02114",
        "617-555-3333",
    ),
    provider(
        "Dr. Jessica Martinez",
        "Neurologist",
        Gender::Female,
        "400 Nerve Center, Boston, MA 02115",
        "617-555-4444",
    ),
    provider(
        "Dr. Christopher Lee",
        "Orthopedist",
        Gender::Male,
        "500 Bone Rd, Boston, MA 02215",
        "617-555-5555",
    ),
    provider(
        "Dr. Amanda Garcia",
        "Orthopedist",
        Gender::Female,
        "600 Joint Ave, Boston, MA 02118",
        "617-555-6666",
    ),
    provider(
        "Dr. James Rodriguez",
        "Pediatrician",
        Gender::Male,
        "700 Kids St, Boston, MA 02120",
        "617-555-7777",
    ),
    provider(
        "Dr. Linda Hernandez",
        "Pediatrician",
        Gender::Female,
        "800 Child Ave, Boston, MA 02119",
        "617-555-8888",
    ),
    provider(
        "Dr. Robert Lopez",
        "Gynecologist",
        Gender::Male,
        "900 Womens Way, Boston, MA 02115",
        "617-555-9999",
    ),
    provider(
        "Dr. Patricia Gonzalez",
        "Gynecologist",
        Gender::Female,
        "1010 Lady St, Boston, MA 02116",
        "617-555-1010",
    ),
    provider(
        "Dr. Daniel Perez",
        "Urologist",
        Gender::Male,
        "1100 Waterworks Rd, Boston, MA 02134",
        "617-555-1100",
    ),
    provider(
        "Dr. Jennifer Sanchez",
        "Urologist",
        Gender::Female,
        "1200 Kidney Ave, Boston, MA 02135",
        "617-555-1200",
    ),
    provider(
        "Dr. William Rivera",
        "Gastroenterologist",
        Gender::Male,
        "1300 Gut St, Boston, MA 02111",
        "617-555-1300",
    ),
    provider(
        "Dr. Elizabeth Torres",
        "Gastroenterologist",
        Gender::Female,
        "1400 Stomach Rd, Boston, MA 02114",
        "617-555-1400",
    ),
    provider(
        "Dr. Joseph Ramirez",
        "Pulmonologist",
        Gender::Male,
        "1500 Lung Ave, Boston, MA 02118",
        "617-555-1500",
    ),
    provider(
        "Dr. Susan Flores",
        "Pulmonologist",
        Gender::Female,
        "1600 Breath St, Boston, MA 02120",
        "617-555-1600",
    ),
    provider(
        "Dr. Thomas Gomez",
        "Oncologist",
        Gender::Male,
        "1700 Hope Rd, Boston, MA 02114",
        "617-555-1700",
    ),
    provider(
        "Dr. Karen Reyes",
        "Oncologist",
        Gender::Female,
        "1800 Cure Ave, Boston, MA 02115",
        "617-555-1800",
    ),
    provider(
        "Dr. Richard Cruz",
        "Radiologist",
        Gender::Male,
        "1900 Xray St, Boston, MA 02118",
        "617-555-1900",
    ),
    provider(
        "Dr. Nancy Morales",
        "Radiologist",
        Gender::Female,
        "2000 Scan Rd, Boston, MA 02130",
        "617-555-2000",
    ),
];

/// Distinct specialties, in listing order.
pub fn specialties() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for p in PROVIDERS.iter() {
        if !seen.contains(&p.specialty) {
            seen.push(p.specialty);
        }
    }
    seen
}

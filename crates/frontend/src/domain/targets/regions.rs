//! Static region / state / territory tables for the cascading selects.
//!
//! The backend has no endpoint for these yet; the tables mirror the ones
//! the sales team works with.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];

static STATES_BY_REGION: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        ("North", vec!["Delhi", "Haryana", "Punjab", "Uttar Pradesh"]),
        (
            "South",
            vec!["Andhra Pradesh", "Karnataka", "Kerala", "Tamil Nadu", "Telangana"],
        ),
        ("East", vec!["Bihar", "Jharkhand", "Odisha", "West Bengal"]),
        ("West", vec!["Gujarat", "Maharashtra", "Rajasthan"]),
        ("Central", vec!["Madhya Pradesh", "Chhattisgarh"]),
    ])
});

static TERRITORIES_BY_STATE: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        (
            "Delhi",
            vec!["Delhi Central", "Delhi East", "Delhi West", "Delhi South", "Delhi North"],
        ),
        (
            "Maharashtra",
            vec!["Mumbai", "Pune", "Nagpur", "Nashik", "Aurangabad"],
        ),
        (
            "Tamil Nadu",
            vec!["Chennai", "Coimbatore", "Madurai", "Tiruchirappalli", "Salem"],
        ),
        (
            "Gujarat",
            vec!["Ahmedabad", "Surat", "Vadodara", "Rajkot", "Bhavnagar"],
        ),
        (
            "Punjab",
            vec!["Ludhiana", "Amritsar", "Jalandhar", "Patiala", "Bathinda"],
        ),
    ])
});

pub fn states_for_region(region: &str) -> Vec<String> {
    STATES_BY_REGION
        .get(region)
        .map(|states| states.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default()
}

pub fn territories_for_state(state: &str) -> Vec<String> {
    TERRITORIES_BY_STATE
        .get(state)
        .map(|territories| territories.iter().map(|t| t.to_string()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_has_states() {
        for region in REGIONS {
            assert!(!states_for_region(region).is_empty(), "{region} has no states");
        }
    }

    #[test]
    fn unknown_keys_cascade_to_empty() {
        assert!(states_for_region("Offshore").is_empty());
        assert!(territories_for_state("Goa").is_empty());
    }

    #[test]
    fn punjab_territories_include_ludhiana() {
        assert!(territories_for_state("Punjab").contains(&"Ludhiana".to_string()));
    }
}

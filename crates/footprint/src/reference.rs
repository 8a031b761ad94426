use std::collections::BTreeMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-capita annual footprint of one country, kg CO2e.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountryReference {
    pub co2_per_capita: f64,
    pub continent: String,
}

/// Static reference averages users are compared against: world average,
/// per-continent averages, per-country per-capita figures. Loaded once,
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReferenceAverages {
    pub world: f64,
    pub continents: BTreeMap<String, f64>,
    pub countries: BTreeMap<String, CountryReference>,
}

lazy_static! {
    static ref REFERENCE: ReferenceAverages =
        serde_json::from_str(include_str!("../data/reference-averages.json"))
            .expect("embedded reference dataset is valid JSON");
}

/// The embedded reference dataset. First access parses the embedded JSON;
/// callers that want a startup-time failure should touch it during boot.
pub fn reference_averages() -> &'static ReferenceAverages {
    &REFERENCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_parses() {
        let reference = reference_averages();
        assert!(reference.world > 0.0);
        assert!(!reference.continents.is_empty());
        assert!(!reference.countries.is_empty());
    }

    #[test]
    fn test_every_country_continent_is_known() {
        let reference = reference_averages();
        for (country, entry) in &reference.countries {
            assert!(
                reference.continents.contains_key(&entry.continent),
                "{country} references unknown continent {}",
                entry.continent
            );
            assert!(entry.co2_per_capita > 0.0, "{country}");
        }
    }
}

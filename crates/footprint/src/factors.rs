use std::collections::HashMap;

use lazy_static::lazy_static;
use thiserror::Error;

use crate::schema;

/// An emission factor rule, one per survey question.
///
/// `Multiply` scales a numeric answer by a per-unit factor and an
/// annualization multiplier. `Lookup` maps a discrete answer option to a
/// fixed annual kg CO2e delta; options absent from the table contribute
/// nothing.
#[derive(Debug, Clone, Copy)]
pub enum EmissionFactor {
    Multiply {
        factor: f64,
        annualize: f64,
    },
    Lookup {
        values: &'static [(&'static str, i64)],
    },
}

impl EmissionFactor {
    /// Table value for an option, 0 when the option is not a key.
    /// Only meaningful for `Lookup` rules; `Multiply` rules have no table.
    pub fn table_value(&self, option: &str) -> i64 {
        match self {
            Self::Multiply { .. } => 0,
            Self::Lookup { values } => values
                .iter()
                .find(|(key, _)| *key == option)
                .map(|(_, value)| *value)
                .unwrap_or(0),
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no emission factor rule for question `{question_id}`")]
    MissingRule { question_id: String },
}

lazy_static! {
    /// All values produce kg CO2e per year.
    ///
    /// Vehicle emissions follow DEFRA 2023 conversion factors (0.21 kg
    /// CO2e/km medium petrol car as the baseline, vehicle-type lookup as
    /// annual deltas against it). Electricity uses the Thai grid
    /// approximation Baht/4 = kg CO2e per month. Diet figures follow
    /// Poore & Nemecek (2018), waste figures the EPA WARM model.
    static ref REGISTRY: HashMap<&'static str, EmissionFactor> = {
        let mut rules = HashMap::new();

        rules.insert(
            "transport_car_km",
            EmissionFactor::Multiply { factor: 0.21, annualize: 52.0 },
        );
        // Annual delta vs the petrol-car baseline. public_transport and
        // train carry a sentinel that zeroes out the personal-km
        // contribution; the calculator cancels it together with the km
        // term itself.
        rules.insert(
            "transport_vehicle_type",
            EmissionFactor::Lookup {
                values: &[
                    ("gasoline_car", 0),
                    ("diesel_car", 200),
                    ("hybrid_car", -800),
                    ("electric_car", -1500),
                    ("gasoline_motorbike", -600),
                    ("electric_motorbike", -900),
                    ("public_transport", -999_999),
                    ("train", -999_999),
                ],
            },
        );
        // DEFRA 2023 aviation factors with radiative forcing, per round trip.
        rules.insert(
            "transport_flights_short",
            EmissionFactor::Multiply { factor: 255.0, annualize: 1.0 },
        );
        rules.insert(
            "transport_flights_long",
            EmissionFactor::Multiply { factor: 1100.0, annualize: 1.0 },
        );
        rules.insert(
            "transport_public",
            EmissionFactor::Lookup {
                values: &[
                    ("never", 0),
                    ("occasional", 340),
                    ("regular", 680),
                    ("daily", 910),
                ],
            },
        );

        rules.insert(
            "energy_electricity",
            EmissionFactor::Multiply { factor: 0.25, annualize: 12.0 },
        );
        // 15 kg LPG cylinder, IPCC 2006 emission factor.
        rules.insert(
            "energy_lpg",
            EmissionFactor::Multiply { factor: 44.1, annualize: 12.0 },
        );

        rules.insert(
            "food_diet",
            EmissionFactor::Lookup {
                values: &[
                    ("vegan", 600),
                    ("vegetarian", 1200),
                    ("pescatarian", 1400),
                    ("low_meat", 1800),
                    ("medium_meat", 2500),
                    ("high_meat", 3300),
                ],
            },
        );
        rules.insert(
            "food_local",
            EmissionFactor::Lookup {
                values: &[
                    ("rarely", 400),
                    ("sometimes", 250),
                    ("often", 120),
                    ("always", 50),
                ],
            },
        );
        rules.insert(
            "food_waste",
            EmissionFactor::Lookup {
                values: &[("none", 50), ("little", 150), ("some", 350), ("lot", 600)],
            },
        );

        rules.insert(
            "waste_recycling",
            EmissionFactor::Lookup {
                values: &[
                    ("none", 700),
                    ("some", 450),
                    ("most", 200),
                    ("everything", 50),
                ],
            },
        );
        rules.insert(
            "waste_composting",
            EmissionFactor::Lookup {
                values: &[("no", 200), ("yes", 0)],
            },
        );
        rules.insert(
            "waste_shopping",
            EmissionFactor::Lookup {
                values: &[("rarely", 100), ("monthly", 400), ("weekly", 1000)],
            },
        );
        rules.insert(
            "waste_electronics",
            EmissionFactor::Lookup {
                values: &[("rarely", 100), ("occasionally", 300), ("frequently", 700)],
            },
        );

        rules
    };
}

/// Rule for a question id, if one is configured.
pub fn lookup(question_id: &str) -> Option<&'static EmissionFactor> {
    REGISTRY.get(question_id)
}

/// Startup check: every question declared in the survey schema must have
/// a rule. A gap is a configuration error, not a per-request condition.
pub fn validate_registry() -> Result<(), RegistryError> {
    for category in schema::SURVEY {
        for question in category.questions {
            if !REGISTRY.contains_key(question.id) {
                return Err(RegistryError::MissingRule {
                    question_id: question.id.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_schema_question() {
        validate_registry().expect("registry must cover the survey schema");
    }

    #[test]
    fn test_lookup_unknown_question() {
        assert!(lookup("transport_teleporter_km").is_none());
    }

    #[test]
    fn test_table_value_defaults_to_zero() {
        let rule = lookup("food_diet").unwrap();
        assert_eq!(rule.table_value("vegan"), 600);
        assert_eq!(rule.table_value("fruitarian"), 0);
    }

    #[test]
    fn test_non_personal_vehicle_modes_share_the_sentinel() {
        let rule = lookup("transport_vehicle_type").unwrap();
        assert_eq!(rule.table_value("public_transport"), -999_999);
        assert_eq!(rule.table_value("train"), -999_999);
    }
}

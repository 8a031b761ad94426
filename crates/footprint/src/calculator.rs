use std::collections::BTreeMap;

use crate::factors::{self, EmissionFactor};
use crate::schema;
use crate::{CategoryTotals, SurveyAnswers};

const VEHICLE_TYPE_QUESTION: &str = "transport_vehicle_type";
const CAR_KM_QUESTION: &str = "transport_car_km";
/// Vehicle-type options that mean "no personal vehicle": the distance
/// answer must not count, and the lookup sentinel for these options must
/// be cancelled along with it.
const NON_PERSONAL_MODES: &[&str] = &["public_transport", "train"];

/// Per-category annual footprint plus the grand total.
///
/// `total` is the sum of the category values by construction, never an
/// independently computed quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    pub total: i64,
    pub categories: CategoryTotals,
}

/// Map a raw answer set to per-category annual kg CO2e and a grand total.
///
/// Never fails: unknown question ids, ids outside the known categories,
/// unparseable numbers, and unknown options all contribute zero. Category
/// buckets are rounded to the nearest integer and clamped to >= 0 at the
/// end; negative intermediate sums are never borrowed across categories.
pub fn calculate(answers: &SurveyAnswers) -> CalculationResult {
    let mut buckets: BTreeMap<&'static str, f64> = schema::SURVEY
        .iter()
        .map(|category| (category.id, 0.0))
        .collect();

    for (question_id, raw_value) in answers {
        let Some(rule) = factors::lookup(question_id) else {
            continue;
        };

        let Some(bucket) = buckets.get_mut(schema::category_of(question_id)) else {
            continue;
        };

        *bucket += contribution(rule, raw_value);
    }

    // If the vehicle type is a non-personal mode, retroactively remove the
    // per-km contribution and the lookup sentinel that offsets it. Both
    // removals are required to land the category back at "no personal
    // vehicle emissions" instead of a large negative sum.
    if let Some(mode) = answers.get(VEHICLE_TYPE_QUESTION)
        && NON_PERSONAL_MODES.contains(&mode.as_str())
        && let Some(transport) = buckets.get_mut(schema::category_of(CAR_KM_QUESTION))
    {
        if let Some(EmissionFactor::Multiply { factor, annualize }) =
            factors::lookup(CAR_KM_QUESTION)
        {
            let km = answers
                .get(CAR_KM_QUESTION)
                .and_then(|value| value.trim().parse::<f64>().ok())
                .unwrap_or(0.0);
            *transport -= km * factor * annualize;
        }

        if let Some(rule) = factors::lookup(VEHICLE_TYPE_QUESTION) {
            *transport -= rule.table_value(mode) as f64;
        }
    }

    let categories: CategoryTotals = buckets
        .into_iter()
        .map(|(category, value)| (category.to_string(), (value.round() as i64).max(0)))
        .collect();

    let total = categories.values().sum();

    CalculationResult { total, categories }
}

fn contribution(rule: &EmissionFactor, raw_value: &str) -> f64 {
    match rule {
        EmissionFactor::Multiply { factor, annualize } => raw_value
            .trim()
            .parse::<f64>()
            .map(|value| value * factor * annualize)
            .unwrap_or(0.0),
        EmissionFactor::Lookup { .. } => rule.table_value(raw_value) as f64,
    }
}

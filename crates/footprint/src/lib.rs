pub mod aggregate;
pub mod calculator;
pub mod factors;
pub mod reference;
pub mod schema;
pub mod validation;

pub use aggregate::{CategoryRow, Comparison, aggregate};
pub use calculator::{CalculationResult, calculate};
pub use factors::{EmissionFactor, RegistryError};
pub use reference::{CountryReference, ReferenceAverages, reference_averages};
pub use schema::{Question, QuestionKind, SurveyCategory, category_of};
pub use validation::{AnswerError, validate_answers};

use std::collections::BTreeMap;

/// Raw survey answers as submitted: question id -> raw string value.
///
/// Ordered so that calculation and serialization are deterministic for a
/// given answer set.
pub type SurveyAnswers = BTreeMap<String, String>;

/// Annual kg CO2e per category, always non-negative.
pub type CategoryTotals = BTreeMap<String, i64>;

/// The fixed survey: four categories, each with its questions. Built once
/// at compile time; the registry in [`crate::factors`] must cover every
/// question id listed here.
#[derive(Debug, Clone, Copy)]
pub struct SurveyCategory {
    pub id: &'static str,
    pub questions: &'static [Question],
}

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: &'static str,
    pub kind: QuestionKind,
}

/// Declared value type of a question. Numbers carry inclusive bounds,
/// choice kinds carry their finite option set.
#[derive(Debug, Clone, Copy)]
pub enum QuestionKind {
    Number { min: f64, max: f64 },
    Select { options: &'static [&'static str] },
    Radio { options: &'static [&'static str] },
}

pub const SURVEY: &[SurveyCategory] = &[
    SurveyCategory {
        id: "transport",
        questions: &[
            Question {
                id: "transport_car_km",
                kind: QuestionKind::Number { min: 0.0, max: 5000.0 },
            },
            Question {
                id: "transport_vehicle_type",
                kind: QuestionKind::Select {
                    options: &[
                        "gasoline_car",
                        "diesel_car",
                        "hybrid_car",
                        "electric_car",
                        "gasoline_motorbike",
                        "electric_motorbike",
                        "public_transport",
                        "train",
                    ],
                },
            },
            Question {
                id: "transport_flights_short",
                kind: QuestionKind::Number { min: 0.0, max: 200.0 },
            },
            Question {
                id: "transport_flights_long",
                kind: QuestionKind::Number { min: 0.0, max: 100.0 },
            },
            Question {
                id: "transport_public",
                kind: QuestionKind::Select {
                    options: &["never", "occasional", "regular", "daily"],
                },
            },
        ],
    },
    SurveyCategory {
        id: "energy",
        questions: &[
            Question {
                id: "energy_electricity",
                kind: QuestionKind::Number { min: 0.0, max: 50000.0 },
            },
            Question {
                id: "energy_lpg",
                kind: QuestionKind::Number { min: 0.0, max: 10.0 },
            },
        ],
    },
    SurveyCategory {
        id: "food",
        questions: &[
            Question {
                id: "food_diet",
                kind: QuestionKind::Select {
                    options: &[
                        "vegan",
                        "vegetarian",
                        "pescatarian",
                        "low_meat",
                        "medium_meat",
                        "high_meat",
                    ],
                },
            },
            Question {
                id: "food_local",
                kind: QuestionKind::Select {
                    options: &["rarely", "sometimes", "often", "always"],
                },
            },
            Question {
                id: "food_waste",
                kind: QuestionKind::Select {
                    options: &["none", "little", "some", "lot"],
                },
            },
        ],
    },
    SurveyCategory {
        id: "waste",
        questions: &[
            Question {
                id: "waste_recycling",
                kind: QuestionKind::Select {
                    options: &["none", "some", "most", "everything"],
                },
            },
            Question {
                id: "waste_composting",
                kind: QuestionKind::Radio {
                    options: &["yes", "no"],
                },
            },
            Question {
                id: "waste_shopping",
                kind: QuestionKind::Select {
                    options: &["rarely", "monthly", "weekly"],
                },
            },
            Question {
                id: "waste_electronics",
                kind: QuestionKind::Select {
                    options: &["rarely", "occasionally", "frequently"],
                },
            },
        ],
    },
];

/// Category id of a question: the prefix before the first `_`
/// (e.g. `transport_car_km` -> `transport`).
pub fn category_of(question_id: &str) -> &str {
    question_id.split('_').next().unwrap_or(question_id)
}

/// Find a question by id across all categories.
pub fn question(question_id: &str) -> Option<&'static Question> {
    SURVEY
        .iter()
        .flat_map(|category| category.questions.iter())
        .find(|question| question.id == question_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_of_strips_after_first_separator() {
        assert_eq!(category_of("transport_car_km"), "transport");
        assert_eq!(category_of("waste_recycling"), "waste");
        assert_eq!(category_of("nosuffix"), "nosuffix");
    }

    #[test]
    fn test_every_question_belongs_to_its_category() {
        for category in SURVEY {
            for question in category.questions {
                assert_eq!(category_of(question.id), category.id);
            }
        }
    }

    #[test]
    fn test_question_lookup() {
        assert!(question("food_diet").is_some());
        assert!(question("food_telepathy").is_none());
    }
}

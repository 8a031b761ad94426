use thiserror::Error;

use crate::SurveyAnswers;
use crate::schema::{self, QuestionKind};

/// Rejection produced by the strict pre-calculation validation pass.
/// The calculator itself never raises these; it degrades malformed input
/// to a zero contribution instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnswerError {
    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("answer for {question} must be a number")]
    NotANumber { question: String },

    #[error("answer for {question} is out of range ({min}-{max})")]
    OutOfRange { question: String, min: f64, max: f64 },

    #[error("invalid option for {question}: {value}")]
    InvalidOption { question: String, value: String },
}

/// Check every answer against the survey schema: the question id must be
/// known, numeric values must parse and respect the inclusive bounds,
/// choice values must be members of the declared option set.
pub fn validate_answers(answers: &SurveyAnswers) -> Result<(), AnswerError> {
    for (question_id, value) in answers {
        let Some(question) = schema::question(question_id) else {
            return Err(AnswerError::UnknownQuestion(question_id.clone()));
        };

        match question.kind {
            QuestionKind::Number { min, max } => {
                let number =
                    value
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| AnswerError::NotANumber {
                            question: question_id.clone(),
                        })?;
                if number < min || number > max {
                    return Err(AnswerError::OutOfRange {
                        question: question_id.clone(),
                        min,
                        max,
                    });
                }
            }
            QuestionKind::Select { options } | QuestionKind::Radio { options } => {
                if !options.contains(&value.as_str()) {
                    return Err(AnswerError::InvalidOption {
                        question: question_id.clone(),
                        value: value.clone(),
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> SurveyAnswers {
        pairs
            .iter()
            .map(|(id, value)| (id.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_valid_answers_pass() {
        let input = answers(&[
            ("transport_car_km", "120"),
            ("transport_vehicle_type", "hybrid_car"),
            ("waste_composting", "yes"),
        ]);
        assert_eq!(validate_answers(&input), Ok(()));
    }

    #[test]
    fn test_unknown_question_is_rejected() {
        let input = answers(&[("transport_rocket_launches", "3")]);
        assert_eq!(
            validate_answers(&input),
            Err(AnswerError::UnknownQuestion(
                "transport_rocket_launches".to_string()
            ))
        );
    }

    #[test]
    fn test_non_numeric_answer_is_rejected() {
        let input = answers(&[("energy_electricity", "a lot")]);
        assert!(matches!(
            validate_answers(&input),
            Err(AnswerError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_out_of_range_number_is_rejected() {
        let input = answers(&[("transport_car_km", "5001")]);
        assert!(matches!(
            validate_answers(&input),
            Err(AnswerError::OutOfRange { .. })
        ));

        let input = answers(&[("transport_car_km", "-1")]);
        assert!(matches!(
            validate_answers(&input),
            Err(AnswerError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let input = answers(&[("transport_car_km", "5000"), ("energy_lpg", "0")]);
        assert_eq!(validate_answers(&input), Ok(()));
    }

    #[test]
    fn test_invalid_option_is_rejected() {
        let input = answers(&[("food_diet", "carnivore")]);
        assert_eq!(
            validate_answers(&input),
            Err(AnswerError::InvalidOption {
                question: "food_diet".to_string(),
                value: "carnivore".to_string(),
            })
        );
    }
}

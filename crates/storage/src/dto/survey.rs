use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for submitting a completed survey.
///
/// `session_id` is the client-chosen session identifier; malformed ids
/// are rejected during deserialization. Answers are raw strings keyed by
/// question id and are validated against the survey schema before the
/// calculator runs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub session_id: Uuid,

    #[serde(default)]
    pub student: Option<StudentInfo>,

    pub answers: BTreeMap<String, String>,
}

/// Optional contact info attached to a submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct StudentInfo {
    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 320, message = "Email is too long")
    )]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub session_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_must_be_a_uuid() {
        let body = r#"{"sessionId": "not-a-uuid", "answers": {}}"#;
        assert!(serde_json::from_str::<SubmitRequest>(body).is_err());

        let body = r#"{"sessionId": "c56a4180-65aa-42ec-a945-5fd21dec0538", "answers": {}}"#;
        assert!(serde_json::from_str::<SubmitRequest>(body).is_ok());
    }

    #[test]
    fn test_student_info_is_optional() {
        let body = r#"{"sessionId": "c56a4180-65aa-42ec-a945-5fd21dec0538", "answers": {"food_diet": "vegan"}}"#;
        let request: SubmitRequest = serde_json::from_str(body).unwrap();
        assert!(request.student.is_none());
        assert_eq!(request.answers["food_diet"], "vegan");
    }

    #[test]
    fn test_student_email_is_validated() {
        let student = StudentInfo {
            name: "Somchai".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(student.validate().is_err());

        let student = StudentInfo {
            name: "Somchai".to_string(),
            email: "somchai@example.ac.th".to_string(),
        };
        assert!(student.validate().is_ok());
    }

    #[test]
    fn test_student_name_must_be_non_empty() {
        let student = StudentInfo {
            name: String::new(),
            email: "somchai@example.ac.th".to_string(),
        };
        assert!(student.validate().is_err());
    }
}

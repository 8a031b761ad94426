use footprint::CalculationResult;
use sqlx::PgPool;
use storage::{
    dto::survey::SubmitRequest,
    error::Result,
    models::Submission,
    repository::submission::SubmissionRepository,
};
use uuid::Uuid;

/// Number of submissions already stored for a session
pub async fn submission_count(pool: &PgPool, session_id: Uuid) -> Result<i64> {
    let repo = SubmissionRepository::new(pool);
    repo.count_for_session(session_id).await
}

/// Persist a calculated footprint: the submission row, its category
/// breakdown, and the raw answers it was derived from.
pub async fn store_submission(
    pool: &PgPool,
    request: &SubmitRequest,
    result: &CalculationResult,
) -> Result<Submission> {
    let repo = SubmissionRepository::new(pool);

    let student_name = request.student.as_ref().map(|student| student.name.as_str());
    let student_email = request.student.as_ref().map(|student| student.email.as_str());

    let submission = repo
        .insert(request.session_id, student_name, student_email, result.total)
        .await?;

    repo.insert_category_rows(submission.submission_id, &result.categories)
        .await?;
    repo.insert_answer_rows(submission.submission_id, &request.answers)
        .await?;

    Ok(submission)
}

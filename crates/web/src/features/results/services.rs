use std::collections::BTreeMap;

use sqlx::PgPool;
use storage::{
    dto::results::ResultsResponse,
    error::Result,
    repository::submission::SubmissionRepository,
};
use uuid::Uuid;

/// Latest stored result for a session: the most recent submission and
/// its category breakdown.
pub async fn latest_results(pool: &PgPool, session_id: Uuid) -> Result<ResultsResponse> {
    let repo = SubmissionRepository::new(pool);

    let submission = repo.latest_for_session(session_id).await?;
    let rows = repo.category_rows_for(submission.submission_id).await?;

    let categories: BTreeMap<String, i64> = rows
        .into_iter()
        .map(|row| (row.category, row.co2_kg))
        .collect();

    Ok(ResultsResponse {
        total: submission.total_co2_kg,
        categories,
        created_at: submission.created_at,
    })
}

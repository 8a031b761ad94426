use footprint::{CategoryRow, CategoryTotals, Comparison};
use sqlx::PgPool;
use storage::{error::Result, repository::submission::SubmissionRepository};
use uuid::Uuid;

/// Build the comparison payload for a session: its latest submission
/// against the averages over every stored submission plus the static
/// reference dataset.
pub async fn compare(pool: &PgPool, session_id: Uuid) -> Result<Comparison> {
    let repo = SubmissionRepository::new(pool);

    let submission = repo.latest_for_session(session_id).await?;
    let user_rows = repo.category_rows_for(submission.submission_id).await?;
    let all_rows = repo.all_category_rows().await?;

    let user: CategoryTotals = user_rows
        .into_iter()
        .map(|row| (row.category, row.co2_kg))
        .collect();

    let all_rows: Vec<CategoryRow> = all_rows
        .into_iter()
        .map(|row| CategoryRow {
            category: row.category,
            co2_kg: row.co2_kg,
        })
        .collect();

    Ok(footprint::aggregate(
        user,
        submission.total_co2_kg,
        &all_rows,
        footprint::reference_averages(),
    ))
}

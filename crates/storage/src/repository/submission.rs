use std::collections::BTreeMap;

use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{CategoryBreakdown, Submission};

/// Submissions a single session may accumulate before further inserts
/// are refused.
pub const MAX_SUBMISSIONS_PER_SESSION: i64 = 10;

pub struct SubmissionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SubmissionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a submission and return the stored row.
    pub async fn insert(
        &self,
        session_id: Uuid,
        student_name: Option<&str>,
        student_email: Option<&str>,
        total_co2_kg: i64,
    ) -> Result<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (session_id, student_name, student_email, total_co2_kg)
            VALUES ($1, $2, $3, $4)
            RETURNING submission_id, session_id, student_name, student_email,
                      total_co2_kg, created_at
            "#,
        )
        .bind(session_id)
        .bind(student_name)
        .bind(student_email)
        .bind(total_co2_kg)
        .fetch_one(self.pool)
        .await?;

        Ok(submission)
    }

    /// Insert one breakdown row per category for a submission.
    pub async fn insert_category_rows(
        &self,
        submission_id: Uuid,
        categories: &BTreeMap<String, i64>,
    ) -> Result<()> {
        if categories.is_empty() {
            return Ok(());
        }

        let mut query =
            QueryBuilder::new("INSERT INTO submission_categories (submission_id, category, co2_kg) ");
        query.push_values(categories, |mut row, (category, co2_kg)| {
            row.push_bind(submission_id)
                .push_bind(category)
                .push_bind(co2_kg);
        });
        query.build().execute(self.pool).await?;

        Ok(())
    }

    /// Insert the raw answers a submission was calculated from.
    pub async fn insert_answer_rows(
        &self,
        submission_id: Uuid,
        answers: &BTreeMap<String, String>,
    ) -> Result<()> {
        if answers.is_empty() {
            return Ok(());
        }

        let mut query = QueryBuilder::new(
            "INSERT INTO submission_answers (submission_id, question_id, answer_value) ",
        );
        query.push_values(answers, |mut row, (question_id, answer_value)| {
            row.push_bind(submission_id)
                .push_bind(question_id)
                .push_bind(answer_value);
        });
        query.build().execute(self.pool).await?;

        Ok(())
    }

    /// Most recently created submission for a session.
    pub async fn latest_for_session(&self, session_id: Uuid) -> Result<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            SELECT submission_id, session_id, student_name, student_email,
                   total_co2_kg, created_at
            FROM submissions
            WHERE session_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(session_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(submission)
    }

    /// Category breakdown rows of one submission.
    pub async fn category_rows_for(&self, submission_id: Uuid) -> Result<Vec<CategoryBreakdown>> {
        let rows = sqlx::query_as::<_, CategoryBreakdown>(
            r#"
            SELECT submission_id, category, co2_kg
            FROM submission_categories
            WHERE submission_id = $1
            ORDER BY category
            "#,
        )
        .bind(submission_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Every stored category breakdown row across all submissions.
    /// Feeds the comparison aggregation, which scans the full set.
    pub async fn all_category_rows(&self) -> Result<Vec<CategoryBreakdown>> {
        let rows = sqlx::query_as::<_, CategoryBreakdown>(
            "SELECT submission_id, category, co2_kg FROM submission_categories",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Number of submissions stored for a session.
    pub async fn count_for_session(&self, session_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM submissions WHERE session_id = $1",
        )
        .bind(session_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }
}

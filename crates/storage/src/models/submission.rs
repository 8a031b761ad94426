use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One completed calculation run tied to a session. Created once,
/// never updated; the per-session retention cap is enforced at insert
/// time by the web layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Submission {
    pub submission_id: Uuid,
    pub session_id: Uuid,
    pub student_name: Option<String>,
    pub student_email: Option<String>,
    pub total_co2_kg: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

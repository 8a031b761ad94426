use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One row per category per submission: that category's annual kg CO2e.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CategoryBreakdown {
    pub submission_id: Uuid,
    pub category: String,
    pub co2_kg: i64,
}

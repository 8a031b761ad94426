use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use footprint::Comparison;
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::error::WebError;
use crate::middleware::rate_limit::client_key;
use crate::state::AppState;

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CompareQuery {
    pub session_id: Uuid,
}

#[utoipa::path(
    get,
    path = "/api/compare",
    params(CompareQuery),
    responses(
        (status = 200, description = "User footprint merged with cross-user and reference averages", body = Comparison),
        (status = 404, description = "No submission exists for the session"),
        (status = 429, description = "Rate limited")
    ),
    tag = "comparison"
)]
pub async fn compare(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CompareQuery>,
) -> Result<Response, WebError> {
    if !state.limiter.check(&client_key(&headers)) {
        return Err(WebError::RateLimited);
    }

    let comparison: Comparison = services::compare(state.db.pool(), query.session_id).await?;

    Ok(Json(comparison).into_response())
}

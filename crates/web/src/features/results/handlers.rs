use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use storage::dto::results::ResultsResponse;
use uuid::Uuid;

use crate::error::WebError;
use crate::middleware::rate_limit::client_key;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/results/{session_id}",
    params(
        ("session_id" = Uuid, Path, description = "Session identifier")
    ),
    responses(
        (status = 200, description = "Latest stored result for the session", body = ResultsResponse),
        (status = 404, description = "No submission exists for the session"),
        (status = 429, description = "Rate limited")
    ),
    tag = "results"
)]
pub async fn get_results(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(session_id): Path<Uuid>,
) -> Result<Response, WebError> {
    if !state.limiter.check(&client_key(&headers)) {
        return Err(WebError::RateLimited);
    }

    let results = services::latest_results(state.db.pool(), session_id).await?;

    Ok(Json(results).into_response())
}

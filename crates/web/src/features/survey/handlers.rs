use axum::{
    Json,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use storage::{
    dto::survey::{SubmitRequest, SubmitResponse},
    repository::submission::MAX_SUBMISSIONS_PER_SESSION,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::rate_limit::client_key;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/submit",
    request_body = SubmitRequest,
    responses(
        (status = 200, description = "Survey submitted and footprint stored", body = SubmitResponse),
        (status = 400, description = "Malformed session id, student info, or answers"),
        (status = 429, description = "Rate limited or submission cap reached")
    ),
    tag = "survey"
)]
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SubmitRequest>,
) -> Result<Response, WebError> {
    if !state.limiter.check(&client_key(&headers)) {
        return Err(WebError::RateLimited);
    }

    if let Some(student) = &request.student {
        student.validate()?;
    }

    footprint::validate_answers(&request.answers)
        .map_err(|error| WebError::BadRequest(error.to_string()))?;

    let count = services::submission_count(state.db.pool(), request.session_id).await?;
    if count >= MAX_SUBMISSIONS_PER_SESSION {
        return Err(WebError::SubmissionLimit(MAX_SUBMISSIONS_PER_SESSION));
    }

    let result = footprint::calculate(&request.answers);
    let submission = services::store_submission(state.db.pool(), &request, &result).await?;

    tracing::info!(
        submission_id = %submission.submission_id,
        total_co2_kg = submission.total_co2_kg,
        "Stored survey submission"
    );

    Ok(Json(SubmitResponse {
        success: true,
        session_id: request.session_id,
    })
    .into_response())
}

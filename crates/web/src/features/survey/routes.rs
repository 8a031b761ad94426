use axum::{Router, routing::post};

use crate::state::AppState;

use super::handlers::submit;

pub fn routes() -> Router<AppState> {
    Router::new().route("/submit", post(submit))
}

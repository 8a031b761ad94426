use axum::{Router, routing::get};

use crate::state::AppState;

use super::handlers::get_results;

pub fn routes() -> Router<AppState> {
    Router::new().route("/results/:session_id", get(get_results))
}

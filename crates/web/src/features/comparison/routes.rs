use axum::{Router, routing::get};

use crate::state::AppState;

use super::handlers::compare;

pub fn routes() -> Router<AppState> {
    Router::new().route("/compare", get(compare))
}

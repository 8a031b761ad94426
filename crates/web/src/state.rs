use std::sync::Arc;

use storage::Database;

use crate::middleware::rate_limit::RateLimiter;

/// Shared handler state: the database handle plus the request limiter.
/// Both are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub limiter: Arc<RateLimiter>,
}

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use middleware::rate_limit::RateLimiter;
use state::AppState;

const LIMITER_SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[derive(OpenApi)]
#[openapi(
    paths(
        features::survey::handlers::submit,
        features::results::handlers::get_results,
        features::comparison::handlers::compare,
    ),
    components(
        schemas(
            storage::dto::survey::SubmitRequest,
            storage::dto::survey::StudentInfo,
            storage::dto::survey::SubmitResponse,
            storage::dto::results::ResultsResponse,
            storage::models::Submission,
            storage::models::CategoryBreakdown,
            footprint::Comparison,
            footprint::ReferenceAverages,
            footprint::CountryReference,
        )
    ),
    tags(
        (name = "survey", description = "Survey submission endpoints"),
        (name = "results", description = "Per-session result endpoints"),
        (name = "comparison", description = "Cross-user comparison endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting carbon footprint survey API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    footprint::factors::validate_registry()
        .context("Emission factor registry does not cover the survey schema")?;
    let reference = footprint::reference_averages();
    tracing::info!(
        "Emission factor registry validated; reference dataset covers {} countries",
        reference.countries.len()
    );

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let limiter = Arc::new(RateLimiter::new(
        config.rate_limit_max_requests,
        config.rate_limit_window,
    ));

    let sweeper = Arc::clone(&limiter);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            sweeper.evict_expired();
        }
    });

    let state = AppState { db, limiter };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = axum::Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api",
            features::survey::routes::routes()
                .merge(features::results::routes::routes())
                .merge(features::comparison::routes::routes()),
        )
        .layer(cors)
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

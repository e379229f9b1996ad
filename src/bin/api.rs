use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use stickerboard::{
    app_state::AppState, config::Config, middleware::CorsPolicy, router::build_router,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = dotenvy::dotenv() {
        warn!(error = %err, "No .env file loaded, using process environment");
    }

    let config = Config::from_env()?;

    // Lazy pool: extraction keeps working while the database is down
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections())
        .connect_lazy(config.database_url())
        .context("Invalid database URL")?;

    let cors = CorsPolicy::new(config.allowed_origins().iter().cloned());
    let app = build_router(AppState::new(pool, &config), cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr()))?;
    info!(
        addr = config.bind_addr(),
        origins = ?config.allowed_origins(),
        "Server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

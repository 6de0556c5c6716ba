use anyhow::{anyhow, Context, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};

use shared_config::AppConfig;

/// Open the connection pool described by `DATABASE_URL`.
pub async fn connect(config: &AppConfig) -> Result<PgPool> {
    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow!("DATABASE_URL is not configured"))?;

    debug!(
        "Connecting to Postgres with at most {} connections",
        config.database_max_connections
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(url)
        .await
        .context("failed to connect to Postgres")?;

    info!("Postgres pool ready");
    Ok(pool)
}

/// Create the `doctors` table if it does not exist yet.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to run database migrations")?;

    info!("Database migrations applied");
    Ok(())
}

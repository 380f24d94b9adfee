use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

// ============================================================================
// Database Pool - one shared pool, scoped per-request acquisition
// ============================================================================
//
// Each request borrows a connection (or transaction) from the pool for its
// own duration and returns it on every exit path. Transactions roll back on
// drop unless explicitly committed.
//
// ============================================================================

/// Connect to Postgres and run pending migrations.
pub async fn connect(config: &Config) -> anyhow::Result<PgPool> {
    tracing::info!("Connecting to Postgres...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready, migrations applied");

    Ok(pool)
}

/// Cheap liveness probe used by the health endpoint.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}

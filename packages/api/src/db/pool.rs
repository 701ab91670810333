//! Pooled database client.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::error::ApiError;
use crate::models::ProbeRow;

/// The fixed query the connectivity probe runs.
pub const PROBE_QUERY: &str = "SELECT 1 AS test";

/// Explicitly constructed database handle.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Open a connection pool for `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, ApiError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;
        tracing::info!(max_connections = config.max_connections, "database pool ready");
        Ok(Self { pool })
    }

    /// Run [`PROBE_QUERY`] and return whatever rows come back.
    pub async fn probe(&self) -> Result<Vec<ProbeRow>, ApiError> {
        let rows: Vec<ProbeRow> = sqlx::query_as(PROBE_QUERY).fetch_all(&self.pool).await?;
        Ok(rows)
    }
}

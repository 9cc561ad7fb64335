use crate::config::Config;
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::info;

pub type ConnectionPool = Pool<Postgres>;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(config: &Config) -> anyhow::Result<ConnectionPool> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
            .connect(&config.database_url)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to ping database: {}", err))?;

        info!("✅ Database connection pool established");

        Ok(pool)
    }
}

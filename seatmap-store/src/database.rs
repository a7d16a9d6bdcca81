use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;
use tracing::info;

use crate::app_config::DatabaseConfig;

#[derive(Clone)]
pub struct DbClient {
    pub pool: MySqlPool,
}

impl DbClient {
    /// Builds the pool without opening a connection; the first query does.
    pub fn new(config: &DatabaseConfig) -> Self {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect_lazy_with(config.connect_options());

        info!(
            "Database pool for {}@{}:{}/{} (max {} connections)",
            config.user, config.host, config.port, config.name, config.max_connections
        );

        Self { pool }
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

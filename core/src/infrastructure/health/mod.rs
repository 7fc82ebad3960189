use std::time::Instant;

use sea_orm::DatabaseConnection;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let started = Instant::now();
        let connected = self.db.ping().await.is_ok();

        Ok(DatabaseHealthStatus {
            connected,
            response_time_ms: started.elapsed().as_millis() as u64,
        })
    }

    async fn health(&self) -> Result<u64, CoreError> {
        let started = Instant::now();
        self.db.ping().await.map_err(|e| {
            error!("Database ping failed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(started.elapsed().as_millis() as u64)
    }
}

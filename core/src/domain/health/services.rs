use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    nutrition::ports::FoodDataPort,
    user::ports::UserRepository,
};

impl<U, H, F, HC> HealthCheckService for Service<U, H, F, HC>
where
    U: UserRepository,
    H: HasherRepository,
    F: FoodDataPort,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}

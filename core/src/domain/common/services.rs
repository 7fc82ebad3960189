use crate::domain::{
    common::AuthConfig, crypto::ports::HasherRepository, health::ports::HealthCheckRepository,
    nutrition::ports::FoodDataPort, user::ports::UserRepository,
};

/// Container for the application's use cases. Each domain module implements
/// its service trait on this type, so one value wires the whole core.
#[derive(Debug, Clone)]
pub struct Service<U, H, F, HC>
where
    U: UserRepository,
    H: HasherRepository,
    F: FoodDataPort,
    HC: HealthCheckRepository,
{
    pub(crate) user_repository: U,
    pub(crate) hasher_repository: H,
    pub(crate) food_data_client: F,
    pub(crate) health_check_repository: HC,
    pub(crate) auth_config: AuthConfig,
    pub(crate) match_threshold: u8,
}

impl<U, H, F, HC> Service<U, H, F, HC>
where
    U: UserRepository,
    H: HasherRepository,
    F: FoodDataPort,
    HC: HealthCheckRepository,
{
    pub fn new(
        user_repository: U,
        hasher_repository: H,
        food_data_client: F,
        health_check_repository: HC,
        auth_config: AuthConfig,
        match_threshold: u8,
    ) -> Self {
        Self {
            user_repository,
            hasher_repository,
            food_data_client,
            health_check_repository,
            auth_config,
            match_threshold,
        }
    }
}

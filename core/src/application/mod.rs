use crate::{
    domain::common::{MealmetricConfig, services::Service},
    infrastructure::{
        crypto::Argon2Hasher,
        db::postgres::{Postgres, PostgresConfig},
        food_data::UsdaFoodDataClient,
        health::PostgresHealthCheckRepository,
        user::PostgresUserRepository,
    },
};

pub type MealmetricService = Service<
    PostgresUserRepository,
    Argon2Hasher,
    UsdaFoodDataClient,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: MealmetricConfig) -> Result<MealmetricService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    let user_repository = PostgresUserRepository::new(postgres.get_db());
    let health_check_repository = PostgresHealthCheckRepository::new(postgres.get_db());
    let hasher_repository = Argon2Hasher::new();
    let food_data_client = UsdaFoodDataClient::new(config.food_data.clone());

    Ok(Service::new(
        user_repository,
        hasher_repository,
        food_data_client,
        health_check_repository,
        config.auth,
        config.food_data.match_threshold,
    ))
}

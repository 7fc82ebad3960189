use clap::Parser;
use mealmetric_core::domain::common::{
    AuthConfig, DatabaseConfig, FoodDataConfig, MealmetricConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "mealmetric-api", about = "Meal nutrition lookup backend")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub food_data: FoodDataArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "db-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "db-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "db-user", env = "DATABASE_USER", default_value = "postgres")]
    pub username: String,

    #[arg(long = "db-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "db-name", env = "DATABASE_NAME", default_value = "mealmetric")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    #[arg(long = "jwt-secret", env = "JWT_SECRET")]
    pub jwt_secret: String,

    #[arg(
        long = "token-ttl-minutes",
        env = "ACCESS_TOKEN_EXPIRE_MINUTES",
        default_value_t = 30
    )]
    pub token_ttl_minutes: i64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct FoodDataArgs {
    #[arg(
        long = "usda-base-url",
        env = "USDA_API_URL",
        default_value = "https://api.nal.usda.gov/fdc/v1"
    )]
    pub base_url: String,

    #[arg(long = "usda-api-key", env = "USDA_API_KEY")]
    pub api_key: String,

    #[arg(long = "match-threshold", env = "MATCH_THRESHOLD", default_value_t = 60)]
    pub match_threshold: u8,
}

impl From<Args> for MealmetricConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                token_ttl_minutes: args.auth.token_ttl_minutes,
            },
            food_data: FoodDataConfig {
                base_url: args.food_data.base_url,
                api_key: args.food_data.api_key,
                match_threshold: args.food_data.match_threshold,
            },
        }
    }
}

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::domain::{
    authentication::{
        entities::JwtClaim,
        ports::AuthService,
        value_objects::{AuthOutput, Identity, LoginInput, RegisterInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    nutrition::ports::FoodDataPort,
    user::{entities::User, ports::UserRepository, value_objects::CreateUserRequest},
};

pub const TOKEN_TYPE_BEARER: &str = "bearer";

impl<U, H, F, HC> Service<U, H, F, HC>
where
    U: UserRepository,
    H: HasherRepository,
    F: FoodDataPort,
    HC: HealthCheckRepository,
{
    fn generate_token(&self, user: &User) -> Result<String, CoreError> {
        let issued_at = Utc::now();
        let expires_at = issued_at + Duration::minutes(self.auth_config.token_ttl_minutes);

        let claims = JwtClaim {
            sub: user.id,
            email: user.email.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.auth_config.jwt_secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("Failed to sign access token: {}", e);
            CoreError::InternalServerError
        })
    }

    fn decode_token(&self, token: &str) -> Result<JwtClaim, CoreError> {
        decode::<JwtClaim>(
            token,
            &DecodingKey::from_secret(self.auth_config.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => CoreError::TokenExpired,
            _ => CoreError::InvalidToken,
        })
    }
}

impl<U, H, F, HC> AuthService for Service<U, H, F, HC>
where
    U: UserRepository,
    H: HasherRepository,
    F: FoodDataPort,
    HC: HealthCheckRepository,
{
    async fn register(&self, input: RegisterInput) -> Result<AuthOutput, CoreError> {
        let existing = self.user_repository.get_by_email(input.email.clone()).await?;
        if existing.is_some() {
            return Err(CoreError::EmailAlreadyRegistered);
        }

        let hashed_password = self.hasher_repository.hash_password(&input.password)?;

        let user = self
            .user_repository
            .create_user(CreateUserRequest {
                first_name: input.first_name,
                last_name: input.last_name,
                email: input.email,
                hashed_password,
            })
            .await?;

        let access_token = self.generate_token(&user)?;

        Ok(AuthOutput {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            user,
        })
    }

    async fn login(&self, input: LoginInput) -> Result<AuthOutput, CoreError> {
        let user = self
            .user_repository
            .get_by_email(input.email)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let valid = self
            .hasher_repository
            .verify_password(&input.password, &user.hashed_password)?;
        if !valid {
            return Err(CoreError::InvalidCredentials);
        }

        let access_token = self.generate_token(&user)?;

        Ok(AuthOutput {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            user,
        })
    }

    async fn authenticate_token(&self, token: String) -> Result<Identity, CoreError> {
        let claims = self.decode_token(&token)?;

        let user = self
            .user_repository
            .get_by_id(claims.sub)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        Ok(Identity::User(user))
    }
}

use axum::extract::State;
use mealmetric_core::domain::{
    authentication::{ports::AuthService, value_objects::LoginInput},
    user::entities::User,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    authentication::validators::LoginRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Log in with email and password",
    description = "Validates credentials and returns a bearer token plus the user profile",
    request_body = LoginRequest,
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Incorrect email or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginRequest>,
) -> Result<Response<LoginResponse>, ApiError> {
    let output = state
        .service
        .login(LoginInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse {
        access_token: output.access_token,
        token_type: output.token_type,
        user: UserResponse::from(output.user),
    }))
}

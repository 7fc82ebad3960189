use axum::extract::State;
use mealmetric_core::domain::authentication::{ports::AuthService, value_objects::RegisterInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    authentication::validators::RegisterUserRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    summary = "Register a new user",
    description = "Creates a user account and returns a bearer token for it",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, body = TokenResponse),
        (status = 400, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterUserRequest>,
) -> Result<Response<TokenResponse>, ApiError> {
    let output = state
        .service
        .register(RegisterInput {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(TokenResponse {
        access_token: output.access_token,
        token_type: output.token_type,
    }))
}

use axum::{
    RequestExt,
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use mealmetric_core::domain::authentication::{ports::AuthService, value_objects::Identity};

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Resolves a bearer token to an [`Identity`] and stores it in the request
/// extensions. Requests without a valid token pass through unauthenticated;
/// handlers that need one use [`RequiredIdentity`].
pub async fn auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    if let Ok(TypedHeader(Authorization(bearer))) = req
        .extract_parts::<TypedHeader<Authorization<Bearer>>>()
        .await
    {
        match state
            .service
            .authenticate_token(bearer.token().to_string())
            .await
        {
            Ok(identity) => {
                req.extensions_mut().insert(identity);
            }
            Err(e) => {
                tracing::debug!("Rejected bearer token: {}", e);
            }
        }
    }

    next.run(req).await
}

pub struct RequiredIdentity(pub Identity);

impl<S> axum::extract::FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| {
                ApiError::Unauthorized("Authentication required: provide a bearer token".to_string())
            })
    }
}

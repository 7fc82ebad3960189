use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::IntoResponse,
};
use mealmetric_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    pub status: i64,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::UnprocessableEntity(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E_UNPROCESSABLE")
            }
            ApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "E_SERVICE_UNAVAILABLE")
            }
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = self.parts();

        let body = ApiErrorBody {
            code: code.to_string(),
            message: self.to_string(),
            status: status.as_u16() as i64,
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::DishNotFound | CoreError::NoNutrientData | CoreError::NotFound => {
                ApiError::NotFound(error.to_string())
            }
            CoreError::EmailAlreadyRegistered | CoreError::Invalid(_) => {
                ApiError::BadRequest(error.to_string())
            }
            CoreError::InvalidCredentials | CoreError::InvalidToken | CoreError::TokenExpired => {
                ApiError::Unauthorized(error.to_string())
            }
            CoreError::ExternalServiceError(_) | CoreError::InternalServerError => {
                ApiError::InternalServerError(error.to_string())
            }
        }
    }
}

/// `Json` extractor that also runs `validator` rules, rejecting with a 422.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::UnprocessableEntity(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::UnprocessableEntity(errors.to_string()))?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_transport_statuses() {
        let cases = [
            (CoreError::DishNotFound, StatusCode::NOT_FOUND),
            (CoreError::NoNutrientData, StatusCode::NOT_FOUND),
            (CoreError::EmailAlreadyRegistered, StatusCode::BAD_REQUEST),
            (CoreError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (CoreError::TokenExpired, StatusCode::UNAUTHORIZED),
            (
                CoreError::ExternalServiceError("USDA API returned error: 500".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let (status, _) = ApiError::from(error).parts();
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn messages_survive_the_mapping() {
        let error = ApiError::from(CoreError::DishNotFound);
        assert_eq!(error, ApiError::NotFound("Dish not found".to_string()));
    }
}

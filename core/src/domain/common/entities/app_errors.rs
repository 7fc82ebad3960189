use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Dish not found")]
    DishNotFound,

    #[error("No nutrient data available for this food")]
    NoNutrientData,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Invalid(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}

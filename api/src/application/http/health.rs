use axum::{Router, extract::State, routing::get};
use mealmetric_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(health, readiness))]
pub struct HealthApiDoc;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub response_time_ms: u64,
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health", root_path), get(health))
        .route(&format!("{}/health/ready", root_path), get(readiness))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let response_time_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        response_time_ms,
    }))
}

#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    summary = "Readiness check",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, description = "Database is unreachable")
    )
)]
pub async fn readiness(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    if !status.connected {
        return Err(ApiError::ServiceUnavailable(
            "Database is unreachable".to_string(),
        ));
    }

    Ok(Response::OK(status))
}

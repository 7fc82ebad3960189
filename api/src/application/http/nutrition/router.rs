use super::handlers::get_calories::{__path_get_calories, get_calories};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_calories))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/get-calories", state.args.server.root_path),
            post(get_calories),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}

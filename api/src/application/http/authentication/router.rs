use super::handlers::{
    login::{__path_login, login},
    register::{__path_register, register},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(register, login))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/auth/register", state.args.server.root_path),
            post(register),
        )
        .route(
            &format!("{}/auth/login", state.args.server.root_path),
            post(login),
        )
}

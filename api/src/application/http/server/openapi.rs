use crate::application::http::authentication::router::AuthenticationApiDoc;
use utoipa::OpenApi;

// Nutrition and Health docs are merged at the root (no path prefix) in
// `http_server::router` via `OpenApi::nest("", ..)`. The derive macro rejects a
// literal empty `path`, but the runtime `nest("", ..)` call it would otherwise
// generate is equivalent, so the composition is performed there instead.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mealmetric API"
    ),
    nest(
        (path = "/auth", api = AuthenticationApiDoc),
    )
)]
pub struct ApiDoc;

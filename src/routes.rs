use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::common::response::{ApiResponse, ApiSuccess};
use crate::docs::ApiDoc;
use crate::state::AppState;

pub fn configure_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", api_routes())
        .layer(cors)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", axum::routing::get(health))
        .merge(crate::modules::encoding::router())
        .merge(crate::modules::validation::router())
        .merge(crate::modules::quality::router())
        .merge(crate::modules::admission::router())
        .merge(crate::modules::toolchain::router())
}

async fn health() -> impl IntoResponse {
    ApiSuccess(ApiResponse::success("ok", "Service is healthy"), StatusCode::OK)
}

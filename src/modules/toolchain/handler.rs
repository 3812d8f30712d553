use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::common::response::ApiSuccess;
use crate::modules::toolchain::dto::*;
use crate::modules::toolchain::service::ToolchainService;
use crate::state::AppState;

/// Check the encoder and prober binaries are installed
#[utoipa::path(
    get,
    path = "/api/v1/toolchain",
    responses(
        (status = 200, description = "Both binaries present", body = ToolchainReport),
        (status = 500, description = "A binary is missing or unusable", body = ToolchainReport)
    ),
    tag = "Pipeline"
)]
pub async fn check_toolchain(State(state): State<AppState>) -> impl IntoResponse {
    let report = ToolchainService::check(state).await;
    let status =
        StatusCode::from_u16(report.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    ApiSuccess(report, status).into_response()
}

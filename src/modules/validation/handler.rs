use axum::extract::{State, rejection::JsonRejection};
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::common::error::PipelineError;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::modules::validation::dto::*;
use crate::modules::validation::service::ValidationService;
use crate::state::AppState;

/// Probe a batch of encoded outputs and keep the ones that are MP3
#[utoipa::path(
    post,
    path = "/api/v1/validate",
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Validated subset", body = ValidateResponse),
        (status = 400, description = "Missing or malformed outputs", body = ApiResponse<String>),
        (status = 422, description = "An output failed probing (strict mode)"),
        (status = 504, description = "Prober timed out")
    ),
    tag = "Pipeline"
)]
pub async fn validate(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return ApiError::from(PipelineError::from(rejection)).into_response(),
    };
    match ValidationService::validate(state, req).await {
        Ok(res) => ApiSuccess(res, StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

use axum::extract::rejection::JsonRejection;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::Value;

use crate::common::error::PipelineError;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::modules::quality::service::QualityService;

/// Attach a quality label derived from `output.bitrate`
#[utoipa::path(
    post,
    path = "/api/v1/quality",
    request_body = Value,
    responses(
        (status = 200, description = "Same object with a `quality` field", body = Value),
        (status = 400, description = "Body is not a JSON object", body = ApiResponse<String>)
    ),
    tag = "Pipeline"
)]
pub async fn label_quality(payload: Result<Json<Value>, JsonRejection>) -> impl IntoResponse {
    let Json(event) = match payload {
        Ok(body) => body,
        Err(rejection) => return ApiError::from(PipelineError::from(rejection)).into_response(),
    };
    match QualityService::label(event) {
        Ok(res) => ApiSuccess(res, StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

use axum::extract::{State, rejection::JsonRejection};
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::common::error::PipelineError;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::modules::encoding::dto::*;
use crate::modules::encoding::service::EncodingService;
use crate::state::AppState;

/// Encode one source object at one bitrate
#[utoipa::path(
    post,
    path = "/api/v1/encode",
    request_body = EncodeRequest,
    responses(
        (status = 200, description = "Encoded, uploaded and confirmed", body = EncodeResponse),
        (status = 400, description = "Missing, empty or malformed request field", body = ApiResponse<String>),
        (status = 404, description = "Source object not found"),
        (status = 422, description = "Encoder failed"),
        (status = 502, description = "Storage transfer or upload verification failed"),
        (status = 504, description = "Encoder timed out")
    ),
    tag = "Pipeline"
)]
pub async fn encode(
    State(state): State<AppState>,
    payload: Result<Json<EncodeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return ApiError::from(PipelineError::from(rejection)).into_response(),
    };
    match EncodingService::encode(state, req).await {
        Ok(res) => ApiSuccess(res, StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

use axum::extract::{State, rejection::JsonRejection};
use axum::{Json, http::StatusCode, response::IntoResponse};
use tracing::warn;

use crate::common::response::ApiSuccess;
use crate::modules::admission::dto::*;
use crate::modules::admission::service::AdmissionService;
use crate::state::AppState;

/// Admit or reject a newly arrived audio file
#[utoipa::path(
    post,
    path = "/api/v1/admission",
    request_body = AdmissionEvent,
    responses(
        (status = 200, description = "File is valid", body = AdmissionResponse),
        (status = 400, description = "Missing fields, wrong content type or too large", body = AdmissionResponse),
        (status = 500, description = "Storage lookup failed", body = AdmissionResponse)
    ),
    tag = "Pipeline"
)]
pub async fn admit(
    State(state): State<AppState>,
    payload: Result<Json<AdmissionEvent>, JsonRejection>,
) -> impl IntoResponse {
    // An unreadable event carries no usable bucket or key.
    let event = match payload {
        Ok(Json(event)) => event,
        Err(rejection) => {
            warn!("Unreadable admission event: {}", rejection.body_text());
            AdmissionEvent::default()
        }
    };
    let res = AdmissionService::check(state, event).await;
    let status = StatusCode::from_u16(res.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    ApiSuccess(res, status).into_response()
}

use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use crate::infrastructure::storage::StorageError;

/// Failure kinds of a pipeline run. None of them is retried.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid request: {0}")]
    Input(String),
    #[error("transfer failed: {0}")]
    Transfer(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("upload verification failed: {0}")]
    Verification(String),
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("{tool} timed out after {limit:?}")]
    Timeout { tool: String, limit: Duration },
    #[error("staging area error: {0}")]
    Staging(#[from] std::io::Error),
}

impl PipelineError {
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Input(_) => "InputError",
            PipelineError::Transfer(_) => "TransferError",
            PipelineError::NotFound(_) => "NotFoundError",
            PipelineError::Verification(_) => "VerificationError",
            PipelineError::Encode(_) => "EncodeError",
            PipelineError::Validation(_) => "ValidationError",
            PipelineError::Timeout { .. } => "TimeoutError",
            PipelineError::Staging(_) => "StagingError",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            PipelineError::Input(_) => StatusCode::BAD_REQUEST,
            PipelineError::NotFound(_) => StatusCode::NOT_FOUND,
            PipelineError::Transfer(_) | PipelineError::Verification(_) => StatusCode::BAD_GATEWAY,
            PipelineError::Encode(_) | PipelineError::Validation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            PipelineError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            PipelineError::Staging(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StorageError> for PipelineError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(msg) => PipelineError::NotFound(msg),
            StorageError::Transfer(msg) => PipelineError::Transfer(msg),
        }
    }
}

/// A body that is not valid JSON, or does not fit the request shape, is an
/// input error like any other missing or malformed field.
impl From<JsonRejection> for PipelineError {
    fn from(rejection: JsonRejection) -> Self {
        PipelineError::Input(rejection.body_text())
    }
}

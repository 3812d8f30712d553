use tracing::{info, warn};

use super::dto::{AdmissionEvent, AdmissionResponse};
use crate::state::AppState;

pub struct AdmissionService;

impl AdmissionService {
    /// Accepts or rejects a newly arrived object. Never fails; every outcome
    /// is a response.
    pub async fn check(state: AppState, event: AdmissionEvent) -> AdmissionResponse {
        let detail = event.detail.unwrap_or_default();
        let bucket = detail.bucket.and_then(|b| b.name).filter(|b| !b.is_empty());
        let object = detail.object.unwrap_or_default();
        let key = object.key.filter(|k| !k.is_empty());

        let (Some(bucket), Some(key)) = (bucket, key) else {
            return respond("Missing bucket or object key in event".to_string(), 400, None, None);
        };

        let metadata = match state.storage.head(&bucket, &key).await {
            Ok(m) => m,
            Err(e) => return respond(format!("S3 Error: {}", e), 500, Some(bucket), Some(key)),
        };

        let content_type = metadata.content_type.unwrap_or_default();
        if !state
            .config
            .admission_content_types
            .iter()
            .any(|accepted| accepted == &content_type)
        {
            return respond(
                format!("Invalid file type: {}", content_type),
                400,
                Some(bucket),
                Some(key),
            );
        }

        let size = object.size.unwrap_or(metadata.size);
        if size > state.config.admission_max_bytes() {
            return respond(
                format!(
                    "File too large ({} bytes). Max size is {}MB",
                    size, state.config.admission_max_mb
                ),
                400,
                Some(bucket),
                Some(key),
            );
        }

        respond("File is valid".to_string(), 200, Some(bucket), Some(key))
    }
}

fn respond(
    message: String,
    status: u16,
    bucket: Option<String>,
    file: Option<String>,
) -> AdmissionResponse {
    let response = AdmissionResponse {
        bucket,
        file,
        message,
        status,
    };

    let bucket = response.bucket.as_deref().unwrap_or("");
    let file = response.file.as_deref().unwrap_or("");
    if status == 200 {
        info!(bucket, file, status, message = %response.message, "Admission decision");
    } else {
        warn!(bucket, file, status, message = %response.message, "Admission decision");
    }

    response
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// File-arrival notification as delivered by the storage event bus.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AdmissionEvent {
    pub detail: Option<EventDetail>,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct EventDetail {
    pub bucket: Option<BucketRef>,
    pub object: Option<ObjectRef>,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct BucketRef {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ObjectRef {
    pub key: Option<String>,
    pub size: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdmissionResponse {
    pub bucket: Option<String>,
    pub file: Option<String>,
    pub message: String,
    pub status: u16,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- REQUEST ---

/// Every field is optional on the wire so absence surfaces as an input error
/// rather than a deserialization failure.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct EncodeRequest {
    pub input: Option<SourceRef>,
    pub output: Option<DestinationRef>,
    pub encoding: Option<EncodingSettings>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
pub struct SourceRef {
    pub bucket: Option<String>,
    pub key: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
pub struct DestinationRef {
    pub bucket: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
pub struct EncodingSettings {
    /// e.g. "64k", "128k", "192k"
    pub bitrate: Option<String>,
}

// --- RESPONSE ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EncodeResponse {
    pub status_code: u16,
    pub input: SourceLocation,
    pub output: OutputDescriptor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SourceLocation {
    pub bucket: String,
    pub key: String,
}

/// One produced output: where it lives and the bitrate it was encoded at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OutputDescriptor {
    pub bucket: String,
    pub key: String,
    pub bitrate: String,
}

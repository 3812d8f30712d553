use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::modules::encoding::dto::OutputDescriptor;

/// One batch item. Fields added by earlier stages (quality, statusCode, ...)
/// ride along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputEnvelope {
    pub output: OutputDescriptor,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// One failing item fails the whole batch.
    #[default]
    Strict,
    /// Each item is judged on its own; failures are reported per item.
    Isolated,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ValidateRequest {
    #[schema(value_type = Option<Vec<Object>>)]
    pub outputs: Option<Vec<OutputEnvelope>>,
    #[serde(default)]
    pub mode: ValidationMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RejectedOutput {
    pub output: OutputDescriptor,
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub status_code: u16,
    #[schema(value_type = Vec<Object>)]
    pub validated_outputs: Vec<OutputEnvelope>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejected_outputs: Vec<RejectedOutput>,
}

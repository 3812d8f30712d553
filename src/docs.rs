use utoipa::OpenApi;

use crate::modules::admission::dto::{AdmissionEvent, AdmissionResponse, BucketRef, EventDetail, ObjectRef};
use crate::modules::encoding::dto::{
    DestinationRef, EncodeRequest, EncodeResponse, EncodingSettings, OutputDescriptor,
    SourceLocation, SourceRef,
};
use crate::modules::toolchain::dto::{ToolchainBody, ToolchainReport};
use crate::modules::validation::dto::{
    RejectedOutput, ValidateRequest, ValidateResponse, ValidationMode,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::encoding::handler::encode,
        crate::modules::validation::handler::validate,
        crate::modules::quality::handler::label_quality,
        crate::modules::admission::handler::admit,
        crate::modules::toolchain::handler::check_toolchain,
    ),
    components(
        schemas(
            EncodeRequest, SourceRef, DestinationRef, EncodingSettings,
            EncodeResponse, SourceLocation, OutputDescriptor,
            ValidateRequest, ValidationMode, ValidateResponse, RejectedOutput,
            AdmissionEvent, EventDetail, BucketRef, ObjectRef, AdmissionResponse,
            ToolchainReport, ToolchainBody,
            crate::modules::quality::model::QualityTier,
        )
    ),
    tags(
        (name = "Pipeline", description = "Audio transcoding pipeline stages")
    )
)]
pub struct ApiDoc;

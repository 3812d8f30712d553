use tracing::{error, info, warn};

use super::dto::{
    OutputEnvelope, RejectedOutput, ValidateRequest, ValidateResponse, ValidationMode,
};
use crate::common::error::PipelineError;
use crate::infrastructure::media::{EXPECTED_CONTAINER, ProbeFormat};
use crate::infrastructure::staging::{StagingArea, StagingRole};
use crate::state::AppState;

pub struct ValidationService;

impl ValidationService {
    pub async fn validate(
        state: AppState,
        req: ValidateRequest,
    ) -> Result<ValidateResponse, PipelineError> {
        let outputs = req
            .outputs
            .ok_or_else(|| PipelineError::Input("missing required field outputs".to_string()))?;
        info!(count = outputs.len(), mode = ?req.mode, "Validating encoded outputs");

        let mut staging = StagingArea::allocate(&state.config.staging_root, "validate").await?;

        let result = match req.mode {
            ValidationMode::Strict => Self::validate_strict(&state, outputs, &mut staging).await,
            ValidationMode::Isolated => {
                Ok(Self::validate_isolated(&state, outputs, &mut staging).await)
            }
        };

        if let Err(e) = &result {
            error!(kind = e.kind(), "❌ Error validating encodings: {}", e);
            staging.release_all().await;
        }
        staging.close().await;
        result
    }

    /// All-or-nothing: a probe failure or a container mismatch fails the batch.
    async fn validate_strict(
        state: &AppState,
        outputs: Vec<OutputEnvelope>,
        staging: &mut StagingArea,
    ) -> Result<ValidateResponse, PipelineError> {
        let mut validated = Vec::with_capacity(outputs.len());

        for item in outputs {
            let format = Self::inspect(state, &item, staging).await?;
            if format.format_name != EXPECTED_CONTAINER {
                return Err(PipelineError::Validation(format!(
                    "{}/{} is {} (expected {})",
                    item.output.bucket, item.output.key, format.format_name, EXPECTED_CONTAINER
                )));
            }
            validated.push(item);
        }

        info!(validated = validated.len(), "✅ Batch validated");
        Ok(ValidateResponse {
            status_code: 200,
            validated_outputs: validated,
            rejected_outputs: Vec::new(),
        })
    }

    async fn validate_isolated(
        state: &AppState,
        outputs: Vec<OutputEnvelope>,
        staging: &mut StagingArea,
    ) -> ValidateResponse {
        let mut validated = Vec::new();
        let mut rejected = Vec::new();

        for item in outputs {
            let inspected = Self::inspect(state, &item, staging).await;
            let reason = match inspected {
                Ok(format) if format.format_name == EXPECTED_CONTAINER => {
                    validated.push(item);
                    continue;
                }
                Ok(format) => format!(
                    "container format {} (expected {})",
                    format.format_name, EXPECTED_CONTAINER
                ),
                Err(e) => format!("{}: {}", e.kind(), e),
            };

            warn!(bucket = %item.output.bucket, key = %item.output.key, "Rejected output: {}", reason);
            rejected.push(RejectedOutput {
                output: item.output,
                reason,
            });
        }

        info!(validated = validated.len(), rejected = rejected.len(), "Batch validated");
        ValidateResponse {
            status_code: 200,
            validated_outputs: validated,
            rejected_outputs: rejected,
        }
    }

    /// Downloads and probes one item. The downloaded copy is always removed.
    async fn inspect(
        state: &AppState,
        item: &OutputEnvelope,
        staging: &mut StagingArea,
    ) -> Result<ProbeFormat, PipelineError> {
        let descriptor = &item.output;
        let path = staging.path(&StagingRole::ValidationCandidate(descriptor.bitrate.clone()));

        let outcome = async {
            state
                .storage
                .fetch(&descriptor.bucket, &descriptor.key, &path)
                .await?;
            state.prober.probe(&path).await
        }
        .await;

        staging.release(std::slice::from_ref(&path)).await;
        outcome
    }
}

use std::path::{Path, PathBuf};

use tracing::{error, info};

use super::dto::{EncodeRequest, EncodeResponse, OutputDescriptor, SourceLocation};
use super::model::{ENCODED_CONTENT_TYPE, JobRequest, JobRun, JobState, destination_key};
use crate::common::error::PipelineError;
use crate::infrastructure::staging::{StagingArea, StagingRole};
use crate::state::AppState;

pub struct EncodingService;

impl EncodingService {
    pub async fn encode(state: AppState, req: EncodeRequest) -> Result<EncodeResponse, PipelineError> {
        let mut run = JobRun::new();
        Self::execute(&state, req, &mut run).await
    }

    /// Runs one encode job, recording each state it reaches in `run`.
    ///
    /// Both staging paths are released exactly once, on success as part of
    /// the cleanup step and on failure before the step's own error is returned.
    pub async fn execute(
        state: &AppState,
        req: EncodeRequest,
        run: &mut JobRun,
    ) -> Result<EncodeResponse, PipelineError> {
        info!(request = ?req, "Processing encode request");

        let job = match req.resolve() {
            Ok(job) => job,
            Err(e) => {
                run.fail();
                return Err(e);
            }
        };

        let mut staging = match StagingArea::allocate(&state.config.staging_root, "encode").await {
            Ok(staging) => staging,
            Err(e) => {
                run.fail();
                return Err(e.into());
            }
        };
        let source_path = staging.path(&StagingRole::Source);
        let output_path = staging.path(&StagingRole::EncodedOutput);

        let outcome = Self::run_steps(state, &job, &staging, &source_path, &output_path, run).await;
        let result = match outcome {
            Ok(response) => Ok(response),
            Err(e) => {
                error!(last_state = %run.state(), kind = e.kind(), "❌ Encode job failed: {}", e);
                run.fail();
                Self::release(&staging, &[source_path, output_path], run).await;
                Err(e)
            }
        };

        staging.close().await;
        result
    }

    async fn release(staging: &StagingArea, paths: &[PathBuf], run: &mut JobRun) {
        let removed = staging.release(paths).await;
        run.record_release(paths, removed);
    }

    async fn run_steps(
        state: &AppState,
        job: &JobRequest,
        staging: &StagingArea,
        source_path: &Path,
        output_path: &Path,
        run: &mut JobRun,
    ) -> Result<EncodeResponse, PipelineError> {
        // 1. Download source
        let size = state
            .storage
            .fetch(&job.source_bucket, &job.source_key, source_path)
            .await?;
        info!(size_bytes = size, path = %source_path.display(), "Source staged");
        run.advance(JobState::SourceDownloaded);

        // 2. Encode
        state
            .encoder
            .encode(source_path, output_path, &job.bitrate)
            .await?;
        if let Ok(meta) = tokio::fs::metadata(output_path).await {
            info!(size_bytes = meta.len(), "Encoded file staged");
        }
        run.advance(JobState::Encoded);

        // 3. Upload
        let output_key = destination_key(&job.source_key, &job.bitrate);
        info!(key = %output_key, "Output key");
        state
            .storage
            .store(output_path, &job.destination_bucket, &output_key, ENCODED_CONTENT_TYPE)
            .await?;
        run.advance(JobState::Uploaded);

        // 4. Authoritative existence check
        let listed = state
            .storage
            .list(&job.destination_bucket, Some(&output_key))
            .await;
        if !listed.iter().any(|k| k == &output_key) {
            return Err(PipelineError::Verification(format!(
                "file not found in bucket after upload: {}/{}",
                job.destination_bucket, output_key
            )));
        }
        run.advance(JobState::UploadConfirmed);

        // 5. Cleanup
        Self::release(
            staging,
            &[source_path.to_path_buf(), output_path.to_path_buf()],
            run,
        )
        .await;
        run.advance(JobState::CleanedUp);

        let response = EncodeResponse {
            status_code: 200,
            input: SourceLocation {
                bucket: job.source_bucket.clone(),
                key: job.source_key.clone(),
            },
            output: OutputDescriptor {
                bucket: job.destination_bucket.clone(),
                key: output_key,
                bitrate: job.bitrate.clone(),
            },
        };
        run.advance(JobState::Done);

        info!(output = ?response.output, "✅ Encode job completed");
        Ok(response)
    }
}

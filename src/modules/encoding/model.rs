use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;
use validator::Validate;

use super::dto::EncodeRequest;
use crate::common::error::PipelineError;

/// Content type attached to every uploaded encode.
pub const ENCODED_CONTENT_TYPE: &str = "audio/mpeg";

/// `encoded/<source_key>/<bitrate>/output.mp3`, slashes in the key preserved.
pub fn destination_key(source_key: &str, bitrate: &str) -> String {
    format!("encoded/{}/{}/output.mp3", source_key, bitrate)
}

/// Fully resolved encode job.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct JobRequest {
    #[validate(length(min = 1, message = "input.bucket must not be empty"))]
    pub source_bucket: String,
    #[validate(length(min = 1, message = "input.key must not be empty"))]
    pub source_key: String,
    #[validate(length(min = 1, message = "output.bucket must not be empty"))]
    pub destination_bucket: String,
    #[validate(length(min = 1, message = "encoding.bitrate must not be empty"))]
    pub bitrate: String,
}

impl EncodeRequest {
    pub fn resolve(self) -> Result<JobRequest, PipelineError> {
        let input = self.input.unwrap_or_default();
        let job = JobRequest {
            source_bucket: required(input.bucket, "input.bucket")?,
            source_key: required(input.key, "input.key")?,
            destination_bucket: required(self.output.and_then(|o| o.bucket), "output.bucket")?,
            bitrate: required(self.encoding.and_then(|e| e.bitrate), "encoding.bitrate")?,
        };

        job.validate()
            .map_err(|e| PipelineError::Input(e.to_string()))?;
        Ok(job)
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, PipelineError> {
    value.ok_or_else(|| PipelineError::Input(format!("missing required field {}", field)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Start,
    SourceDownloaded,
    Encoded,
    Uploaded,
    UploadConfirmed,
    CleanedUp,
    Done,
    Failed,
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobState::Start => "START",
            JobState::SourceDownloaded => "SOURCE_DOWNLOADED",
            JobState::Encoded => "ENCODED",
            JobState::Uploaded => "UPLOADED",
            JobState::UploadConfirmed => "UPLOAD_CONFIRMED",
            JobState::CleanedUp => "CLEANED_UP",
            JobState::Done => "DONE",
            JobState::Failed => "FAILED",
        };
        f.write_str(name)
    }
}

/// State of one encode run plus every state it has passed through, and the
/// staging paths handed back for cleanup.
#[derive(Debug)]
pub struct JobRun {
    state: JobState,
    history: Vec<JobState>,
    released: Vec<PathBuf>,
    files_removed: usize,
}

impl JobRun {
    pub fn new() -> Self {
        Self {
            state: JobState::Start,
            history: vec![JobState::Start],
            released: Vec::new(),
            files_removed: 0,
        }
    }

    pub fn state(&self) -> JobState {
        self.state
    }

    pub fn history(&self) -> &[JobState] {
        &self.history
    }

    pub fn released(&self) -> &[PathBuf] {
        &self.released
    }

    /// Staged files that actually existed when cleanup ran.
    pub fn files_removed(&self) -> usize {
        self.files_removed
    }

    pub(crate) fn record_release(&mut self, paths: &[PathBuf], removed: usize) {
        self.released.extend(paths.iter().cloned());
        self.files_removed += removed;
    }

    /// How many times `path` was handed to cleanup.
    pub fn release_count(&self, path: &Path) -> usize {
        self.released.iter().filter(|p| p.as_path() == path).count()
    }

    pub(crate) fn advance(&mut self, next: JobState) {
        info!(from = %self.state, to = %next, "Job state transition");
        self.state = next;
        self.history.push(next);
    }

    pub(crate) fn fail(&mut self) {
        self.advance(JobState::Failed);
    }
}

impl Default for JobRun {
    fn default() -> Self {
        Self::new()
    }
}

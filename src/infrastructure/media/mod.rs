use std::path::Path;

use async_trait::async_trait;

use crate::common::error::PipelineError;

pub mod command;
pub mod ffmpeg;
pub mod ffprobe;

pub use ffmpeg::FfmpegEncoder;
pub use ffprobe::{FfprobeProber, ProbeFormat};

/// Container format every produced output must probe as.
pub const EXPECTED_CONTAINER: &str = "mp3";

#[async_trait]
pub trait AudioEncoder: Send + Sync {
    async fn encode(&self, input: &Path, output: &Path, bitrate: &str) -> Result<(), PipelineError>;
}

#[async_trait]
pub trait MediaProber: Send + Sync {
    async fn probe(&self, path: &Path) -> Result<ProbeFormat, PipelineError>;
}

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::info;

use super::AudioEncoder;
use super::command::run_tool;
use crate::common::error::PipelineError;

/// Value of the `encoder` metadata tag written into every output.
pub const ENCODER_TAG: &str = "audio_pipeline_ffmpeg";

pub struct FfmpegEncoder {
    binary: PathBuf,
    timeout: Duration,
}

impl FfmpegEncoder {
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }
}

/// Audio-only MP3 encode at `bitrate`, overwriting `output`.
pub fn encode_args(input: &Path, output: &Path, bitrate: &str) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::with_capacity(18);
    args.push("-y".into());
    args.push("-i".into());
    args.push(input.into());
    args.extend(
        [
            "-c:a",
            "libmp3lame",
            "-b:a",
            bitrate,
            "-map",
            "0:a",
            "-f",
            "mp3",
            "-metadata",
        ]
        .map(OsString::from),
    );
    args.push(format!("encoder={}", ENCODER_TAG).into());
    args.push("-metadata".into());
    args.push(format!("bitrate={}", bitrate).into());
    args.push(output.into());
    args
}

#[async_trait]
impl AudioEncoder for FfmpegEncoder {
    async fn encode(&self, input: &Path, output: &Path, bitrate: &str) -> Result<(), PipelineError> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(encode_args(input, output, bitrate));

        run_tool(cmd, self.timeout)
            .await
            .map_err(|e| e.into_pipeline(PipelineError::Encode))?;

        info!(
            input = %input.display(),
            output = %output.display(),
            bitrate,
            "🎵 Encoded"
        );
        Ok(())
    }
}

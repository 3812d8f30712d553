use std::path::Path;
use std::time::Duration;

use anyhow::{Result, anyhow, bail};
use tokio::process::Command;
use tracing::{error, info};

use super::dto::{ToolchainBody, ToolchainReport};
use crate::infrastructure::media::command::run_tool;
use crate::state::AppState;

pub struct ToolchainService;

impl ToolchainService {
    pub async fn check(state: AppState) -> ToolchainReport {
        let config = &state.config;
        let timeout = config.tool_timeout();

        match Self::versions(&config.ffmpeg_path, &config.ffprobe_path, timeout).await {
            Ok((ffmpeg_version, ffprobe_version)) => {
                info!(%ffmpeg_version, %ffprobe_version, "✅ Toolchain available");
                ToolchainReport {
                    status_code: 200,
                    body: ToolchainBody::Available {
                        message: "FFmpeg layer test successful".to_string(),
                        ffmpeg_version,
                        ffprobe_version,
                        ffmpeg_path: config.ffmpeg_path.display().to_string(),
                        ffprobe_path: config.ffprobe_path.display().to_string(),
                    },
                }
            }
            Err(e) => {
                error!("❌ Toolchain check failed: {:#}", e);
                ToolchainReport {
                    status_code: 500,
                    body: ToolchainBody::Unavailable {
                        message: "FFmpeg layer test failed".to_string(),
                        error: format!("{:#}", e),
                    },
                }
            }
        }
    }

    async fn versions(ffmpeg: &Path, ffprobe: &Path, timeout: Duration) -> Result<(String, String)> {
        for (name, path) in [("FFmpeg", ffmpeg), ("FFprobe", ffprobe)] {
            if !tokio::fs::try_exists(path).await.unwrap_or(false) {
                bail!("{} not found at {}", name, path.display());
            }
        }

        Ok((
            version_line(ffmpeg, timeout).await?,
            version_line(ffprobe, timeout).await?,
        ))
    }
}

/// First line of `<binary> -version`.
async fn version_line(binary: &Path, timeout: Duration) -> Result<String> {
    let mut cmd = Command::new(binary);
    cmd.arg("-version");

    let output = run_tool(cmd, timeout).await?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .next()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("{} printed no version", binary.display()))
}

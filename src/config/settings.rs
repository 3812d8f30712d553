use std::path::PathBuf;
use std::time::Duration;

use crate::config::env::{self, EnvKey};

const MIB: u64 = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub aws_region: String,
    pub s3_endpoint: Option<String>,
    pub aws_access_key: String,
    pub aws_secret_key: String,
    pub aws_session_token: Option<String>,
    pub ffmpeg_path: PathBuf,
    pub ffprobe_path: PathBuf,
    pub staging_root: PathBuf,
    pub tool_timeout_secs: u64,
    pub admission_max_mb: u64,
    pub admission_content_types: Vec<String>,
    pub log_format: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        let defaults = Self::default();

        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, defaults.server_port),
            aws_region: env::get_or(EnvKey::AwsRegion, &defaults.aws_region),
            s3_endpoint: env::get_opt(EnvKey::S3Endpoint),
            aws_access_key: env::get(EnvKey::AwsAccessKey)?,
            aws_secret_key: env::get(EnvKey::AwsSecretKey)?,
            aws_session_token: env::get_opt(EnvKey::AwsSessionToken),
            ffmpeg_path: env::get_opt(EnvKey::FfmpegPath)
                .map(PathBuf::from)
                .unwrap_or(defaults.ffmpeg_path),
            ffprobe_path: env::get_opt(EnvKey::FfprobePath)
                .map(PathBuf::from)
                .unwrap_or(defaults.ffprobe_path),
            staging_root: env::get_opt(EnvKey::StagingRoot)
                .map(PathBuf::from)
                .unwrap_or(defaults.staging_root),
            tool_timeout_secs: env::get_parsed(EnvKey::ToolTimeoutSecs, defaults.tool_timeout_secs),
            admission_max_mb: env::get_parsed(EnvKey::AdmissionMaxMb, defaults.admission_max_mb),
            admission_content_types: env::get_opt(EnvKey::AdmissionContentTypes)
                .map(|raw| parse_list(&raw))
                .unwrap_or(defaults.admission_content_types),
            log_format: env::get_or(EnvKey::LogFormat, &defaults.log_format),
        })
    }

    pub fn tool_timeout(&self) -> Duration {
        Duration::from_secs(self.tool_timeout_secs)
    }

    pub fn admission_max_bytes(&self) -> u64 {
        self.admission_max_mb * MIB
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 3000,
            aws_region: "us-east-1".to_string(),
            s3_endpoint: None,
            aws_access_key: String::new(),
            aws_secret_key: String::new(),
            aws_session_token: None,
            ffmpeg_path: PathBuf::from("/opt/bin/ffmpeg"),
            ffprobe_path: PathBuf::from("/opt/bin/ffprobe"),
            staging_root: std::env::temp_dir(),
            tool_timeout_secs: 300,
            admission_max_mb: 50,
            admission_content_types: vec!["audio/mp3".to_string()],
            log_format: "pretty".to_string(),
        }
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

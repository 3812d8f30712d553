use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    AwsRegion,
    S3Endpoint,
    AwsAccessKey,
    AwsSecretKey,
    AwsSessionToken,
    FfmpegPath,
    FfprobePath,
    StagingRoot,
    ToolTimeoutSecs,
    AdmissionMaxMb,
    AdmissionContentTypes,
    LogFormat,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::AwsRegion => "AWS_REGION",
            EnvKey::S3Endpoint => "S3_ENDPOINT",
            EnvKey::AwsAccessKey => "AWS_ACCESS_KEY_ID",
            EnvKey::AwsSecretKey => "AWS_SECRET_ACCESS_KEY",
            EnvKey::AwsSessionToken => "AWS_SESSION_TOKEN",
            EnvKey::FfmpegPath => "FFMPEG_PATH",
            EnvKey::FfprobePath => "FFPROBE_PATH",
            EnvKey::StagingRoot => "STAGING_ROOT",
            EnvKey::ToolTimeoutSecs => "TOOL_TIMEOUT_SECS",
            EnvKey::AdmissionMaxMb => "ADMISSION_MAX_MB",
            EnvKey::AdmissionContentTypes => "ADMISSION_CONTENT_TYPES",
            EnvKey::LogFormat => "LOG_FORMAT",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

/// Unset and blank variables both read as `None`.
pub fn get_opt(key: EnvKey) -> Option<String> {
    env::var(key.as_str()).ok().filter(|v| !v.trim().is_empty())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
